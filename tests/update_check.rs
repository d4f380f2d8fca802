//! Update checks driven through the public API

use gh_update_checker::{
    CheckError, Transport, UpdateResult, VersionOrigin, check_github_update,
    check_github_update_async, check_update,
};

/// Transport that serves a canned response body.
struct FixedBody(&'static str);

impl Transport for FixedBody {
    fn fetch(&self, _url: &str) -> Result<String, CheckError> {
        Ok(self.0.to_string())
    }
}

// A trimmed latest-release document as the GitHub API returns it.
const RELEASE_BODY: &str = r#"{
  "url": "https://api.github.com/repos/nlohmann/json/releases/211534271",
  "tag_name": "v3.12.0",
  "name": "JSON for Modern C++ version 3.12.0",
  "draft": false,
  "prerelease": false
}"#;

#[test]
fn update_is_detected_through_the_public_api() {
    let result = check_update(
        &FixedBody(RELEASE_BODY),
        "https://github.com/nlohmann/json",
        "3.11.2",
    )
    .unwrap();

    assert_eq!(
        result,
        UpdateResult {
            has_update: true,
            latest_version: "v3.12.0".to_string(),
        }
    );
}

#[test]
fn newer_local_version_reports_no_update() {
    let result = check_update(
        &FixedBody(RELEASE_BODY),
        "https://github.com/nlohmann/json",
        "999.0.0",
    )
    .unwrap();

    assert!(!result.has_update);
    assert_eq!(result.latest_version, "v3.12.0");
}

#[test]
fn api_error_body_surfaces_its_message() {
    let err = check_update(
        &FixedBody(r#"{"message": "Not Found", "status": "404"}"#),
        "https://github.com/owner/no-such-repo",
        "1.0.0",
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "GitHub API error: Not Found");
}

#[tokio::test]
async fn async_check_propagates_the_error_kind() {
    // An unrecognized host fails during canonicalization, before any
    // network activity, so this test stays hermetic.
    let err = check_github_update_async(
        "https://not-github.example/some/repo".to_string(),
        "1.0.0".to_string(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CheckError::InvalidRepositoryUrl(_)));
}

#[tokio::test]
async fn async_check_rejects_a_bad_local_version_without_fetching() {
    // Local-version validation precedes the fetch, so this stays hermetic
    // even though the repository reference is valid.
    let err = check_github_update_async(
        "https://github.com/nlohmann/json".to_string(),
        "not-a-version".to_string(),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        CheckError::InvalidVersionFormat {
            origin: VersionOrigin::Local,
            ..
        }
    ));
}

#[tokio::test]
async fn concurrent_checks_fail_independently() {
    let first = check_github_update_async(
        "https://not-github.example/a/a".to_string(),
        "1.0.0".to_string(),
    );
    let second = check_github_update_async("bogus".to_string(), "2.0.0".to_string());

    let (first, second) = tokio::join!(first, second);

    assert!(matches!(
        first.unwrap_err(),
        CheckError::InvalidRepositoryUrl(url) if url.contains("not-github.example")
    ));
    assert!(matches!(
        second.unwrap_err(),
        CheckError::InvalidRepositoryUrl(url) if url == "bogus"
    ));
}

// The tests below talk to the live GitHub API; run them with
// `cargo test -- --ignored` when network access is available.

#[test]
#[ignore]
fn live_web_url_check_finds_an_update() {
    let result = check_github_update("https://github.com/nlohmann/json", "0.0.1").unwrap();

    assert!(result.has_update);
    assert!(!result.latest_version.is_empty());
}

#[test]
#[ignore]
fn live_api_url_check_finds_a_release() {
    let result = check_github_update(
        "https://api.github.com/repos/nlohmann/json/releases/latest",
        "0.0.1",
    )
    .unwrap();

    assert!(!result.latest_version.is_empty());
}

#[test]
#[ignore]
fn live_check_with_far_future_local_version_reports_no_update() {
    let result = check_github_update("https://github.com/nlohmann/json", "999.0.0").unwrap();

    assert!(!result.has_update);
}

#[tokio::test]
#[ignore]
async fn live_async_check_completes() {
    let result = check_github_update_async(
        "https://github.com/nlohmann/json".to_string(),
        "0.5.0".to_string(),
    )
    .await
    .unwrap();

    assert!(!result.latest_version.is_empty());
}
