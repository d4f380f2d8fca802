//! Repository reference canonicalization
//!
//! Turns a GitHub web URL, or an already-canonical API URL, into the
//! `releases/latest` API endpoint for that repository.

use regex::Regex;

use crate::error::CheckError;

/// Host marker identifying an already-canonical API URL.
const API_HOST: &str = "api.github.com";

/// Converts a repository reference into the canonical releases API URL.
///
/// A reference containing the `api.github.com` host is returned unchanged,
/// which makes the function idempotent. Anything else must contain
/// `https://github.com/<owner>/<repo>`; path segments past the repository
/// are ignored and a trailing `.git` on the repository segment is
/// stripped.
///
/// # Examples
///
/// ```
/// use gh_update_checker::to_api_url;
///
/// let url = to_api_url("https://github.com/nlohmann/json.git").unwrap();
/// assert_eq!(
///     url,
///     "https://api.github.com/repos/nlohmann/json/releases/latest"
/// );
/// ```
pub fn to_api_url(repo_ref: &str) -> Result<String, CheckError> {
    if repo_ref.contains(API_HOST) {
        return Ok(repo_ref.to_string());
    }

    let re = Regex::new(r"https://github\.com/([^/]+)/([^/]+)").unwrap();

    let caps = re
        .captures(repo_ref)
        .ok_or_else(|| CheckError::InvalidRepositoryUrl(repo_ref.to_string()))?;

    let owner = caps.get(1).unwrap().as_str();
    let repo = caps.get(2).unwrap().as_str();
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    Ok(format!(
        "https://{}/repos/{}/{}/releases/latest",
        API_HOST, owner, repo
    ))
}
