//! HTTP transport for fetching release metadata

use std::time::Duration;

#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::error::CheckError;

/// User-Agent sent with every request; the GitHub API rejects requests
/// without one.
const USER_AGENT: &str = "gh-update-checker";

/// Default timeout covering the whole request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the body at a URL.
///
/// The checker's one injected collaborator. Implementations report
/// transport-level failures (connect, timeout) through the error and
/// otherwise return the response body as text, whatever its HTTP status:
/// the GitHub API answers error statuses with a diagnostic JSON body that
/// the checker still needs to see.
#[cfg_attr(test, automock)]
pub trait Transport: Send + Sync {
    /// Fetches `url` and returns the response body.
    fn fetch(&self, url: &str) -> Result<String, CheckError>;
}

/// Blocking reqwest-backed transport.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Creates a transport with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a transport with a caller-chosen timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str) -> Result<String, CheckError> {
        debug!("fetching {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()?;

        Ok(response.text()?)
    }
}
