//! Mock HTTP server for release API tests.
//!
//! Wraps an `httpmock` server with helpers for the single endpoint the lookup
//! uses, `GET /repos/{owner}/{repo}/releases/latest`.
//!
//! # Example
//! ```ignore
//! let api = MockReleaseApi::start();
//! let mock = api.release("owner/repo", r#"{"tag_name":"v1.0.0"}"#);
//! let client = GitHubReleases::new(api.base_url())?;
//! assert_eq!(client.latest_version("owner/repo")?, "1.0.0");
//! mock.assert();
//! ```

use httpmock::Mock;
use httpmock::prelude::*;

/// Release API double on a random local port.
pub struct MockReleaseApi {
    server: MockServer,
}

impl MockReleaseApi {
    /// Start a new mock server on a random available port.
    pub fn start() -> Self {
        Self {
            server: MockServer::start(),
        }
    }

    /// Base URL to pass as the API base.
    pub fn base_url(&self) -> String {
        self.server.base_url()
    }

    /// The underlying server, for custom matchers.
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Answer the latest-release endpoint of `identifier` with a 200 and `body`.
    pub fn release(&self, identifier: &str, body: &str) -> Mock<'_> {
        self.respond(identifier, 200, body)
    }

    /// Answer the latest-release endpoint of `identifier` with `status`.
    pub fn error(&self, identifier: &str, status: u16, body: &str) -> Mock<'_> {
        self.respond(identifier, status, body)
    }

    /// Match every request, so tests can assert nothing was sent.
    pub fn catch_all(&self) -> Mock<'_> {
        self.server.mock(|_when, then| {
            then.status(500);
        })
    }

    fn respond(&self, identifier: &str, status: u16, body: &str) -> Mock<'_> {
        let path = latest_path(identifier);
        let body = body.to_string();
        self.server.mock(move |when, then| {
            when.method(GET).path(path);
            then.status(status)
                .header("content-type", "application/json")
                .body(body);
        })
    }
}

fn latest_path(identifier: &str) -> String {
    format!("/repos/{identifier}/releases/latest")
}
