//! Error types for the update check

use thiserror::Error;

/// A string that contains no parsable `major.minor[.patch]` version.
///
/// Covers both a missing pattern and a numeric component too large for
/// `u64`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no usable major.minor[.patch] version in {0:?}")]
pub struct InvalidVersion(pub String);

/// Which of the two compared version strings failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOrigin {
    /// The caller-supplied local version.
    Local,
    /// The release tag reported by the remote API.
    Remote,
}

impl std::fmt::Display for VersionOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionOrigin::Local => f.write_str("local"),
            VersionOrigin::Remote => f.write_str("remote"),
        }
    }
}

/// Errors surfaced by an update check.
///
/// Every failure aborts the whole check at its origin; nothing is retried
/// or recovered below the caller.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A version string (local or remote tag) did not parse.
    #[error("invalid {origin} version: {source}")]
    InvalidVersionFormat {
        origin: VersionOrigin,
        source: InvalidVersion,
    },

    /// The repository reference is neither a GitHub web URL nor an API URL.
    #[error(
        "invalid repository URL {0:?}: expected https://github.com/<owner>/<repo> or an api.github.com URL"
    )]
    InvalidRepositoryUrl(String),

    /// The transport could not complete the request.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request completed but the response carries no usable release tag.
    #[error("GitHub API error: {0}")]
    RemoteApi(String),
}
