//! Checks whether a GitHub repository has published a release newer than
//! a locally installed version.
//!
//! The check is one synchronous sequence: canonicalize the repository
//! reference into the `releases/latest` API URL, fetch the latest-release
//! document, extract its tag, parse both versions as `major.minor[.patch]`
//! and compare them. [`check_github_update_async`] runs the same sequence
//! on a worker thread for async callers.
//!
//! ```no_run
//! use gh_update_checker::check_github_update;
//!
//! # fn main() -> Result<(), gh_update_checker::CheckError> {
//! let result = check_github_update("https://github.com/nlohmann/json", "3.11.2")?;
//! if result.has_update {
//!     println!("update available: {}", result.latest_version);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`semver`]: three-component version parsing and ordering
//! - [`repo_url`]: repository reference canonicalization
//! - [`transport`]: the HTTP collaborator boundary
//! - [`checker`]: the check itself plus its non-blocking wrapper
//! - [`error`]: the error taxonomy

pub mod checker;
pub mod error;
pub mod repo_url;
pub mod semver;
pub mod transport;

pub use checker::{UpdateResult, check_github_update, check_github_update_async, check_update};
pub use error::{CheckError, InvalidVersion, VersionOrigin};
pub use repo_url::to_api_url;
pub use semver::SemVer;
pub use transport::{HttpTransport, Transport};
