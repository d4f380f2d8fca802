//! Update check orchestration
//!
//! Composes URL canonicalization, version parsing and the HTTP transport
//! into a single update-check sequence, plus a non-blocking wrapper around
//! it.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{CheckError, VersionOrigin};
use crate::repo_url;
use crate::semver::SemVer;
use crate::transport::{HttpTransport, Transport};

/// Outcome of a completed update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    /// Whether the latest release is strictly newer than the local version.
    pub has_update: bool,
    /// The release tag exactly as published, not normalized.
    pub latest_version: String,
}

/// Checks `repo_ref` for a release newer than `local_version`.
///
/// Canonicalizes the repository reference and parses the local version
/// before anything touches the network, so a bad reference or a malformed
/// local version never costs a fetch. Then the latest-release document is
/// fetched through `transport`, its tag extracted and parsed, and the two
/// versions compared. Any failure aborts the check; nothing is retried.
pub fn check_update<T: Transport>(
    transport: &T,
    repo_ref: &str,
    local_version: &str,
) -> Result<UpdateResult, CheckError> {
    let api_url = repo_url::to_api_url(repo_ref)?;
    let local = SemVer::parse(local_version).map_err(|source| CheckError::InvalidVersionFormat {
        origin: VersionOrigin::Local,
        source,
    })?;
    debug!("checking {} against local version {}", api_url, local);

    let body = transport.fetch(&api_url)?;
    let tag = extract_tag(&body)?;

    let remote = SemVer::parse(&tag).map_err(|source| CheckError::InvalidVersionFormat {
        origin: VersionOrigin::Remote,
        source,
    })?;

    Ok(UpdateResult {
        has_update: remote > local,
        latest_version: tag,
    })
}

/// Checks a GitHub repository using the default HTTP transport.
///
/// `repo_ref` is a `https://github.com/<owner>/<repo>` web URL (a trailing
/// `.git` is fine) or an `api.github.com` URL used as-is.
pub fn check_github_update(
    repo_ref: &str,
    local_version: &str,
) -> Result<UpdateResult, CheckError> {
    check_update(&HttpTransport::new(), repo_ref, local_version)
}

/// Runs [`check_github_update`] on a blocking worker thread.
///
/// Inputs are taken by value so the check never borrows from the caller.
/// The error kind reaches the awaiter unchanged. There is no cancellation:
/// a started check runs to completion or failure.
pub async fn check_github_update_async(
    repo_ref: String,
    local_version: String,
) -> Result<UpdateResult, CheckError> {
    tokio::task::spawn_blocking(move || check_github_update(&repo_ref, &local_version))
        .await
        .expect("update check task panicked")
}

/// Pulls the release tag out of a latest-release response body.
///
/// The GitHub API reports errors (not found, rate limit) as a JSON object
/// carrying a `message` field instead of `tag_name`; that message is
/// surfaced as the API error.
fn extract_tag(body: &str) -> Result<String, CheckError> {
    let json: Value = serde_json::from_str(body).map_err(|e| {
        warn!("failed to parse release response: {}", e);
        CheckError::RemoteApi(format!("response is not valid JSON: {}", e))
    })?;

    if let Some(tag) = json.get("tag_name").and_then(Value::as_str) {
        return Ok(tag.to_string());
    }

    if let Some(message) = json.get("message").and_then(Value::as_str) {
        warn!("GitHub API reported an error: {}", message);
        return Err(CheckError::RemoteApi(message.to_string()));
    }

    warn!("release response carries no usable tag_name");
    Err(CheckError::RemoteApi(
        "no valid tag_name in response".to_string(),
    ))
}
