//! Release lookup.
//!
//! Resolves the latest published version of an `owner/repo` identifier. The
//! HTTP client lives in [`github`]; callers depend on the [`ReleaseSource`]
//! trait so the check flow can run against any implementation.

pub mod github;

use crate::error::{Result, SuError};

pub use github::GitHubReleases;

/// Default root of the release API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
/// Fixed `User-Agent` sent with every request.
pub const USER_AGENT: &str = "ShouldUpdateApp/1.0";
/// Versioned API media type sent as `Accept`.
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Something that can answer "what is the latest version of `identifier`?".
pub trait ReleaseSource {
    /// Latest version for `identifier`, with a leading `v` stripped.
    fn latest_version(&self, identifier: &str) -> Result<String>;
}

/// The parts of a published release this tool reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub tag_name: String,
    pub name: Option<String>,
    pub body: Option<String>,
    pub html_url: Option<String>,
}

impl ReleaseInfo {
    /// The tag with its `v` prefix removed.
    #[must_use]
    pub fn version(&self) -> &str {
        strip_version_prefix(&self.tag_name)
    }
}

/// Strip exactly one leading `v` from a tag.
#[must_use]
pub fn strip_version_prefix(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Split `owner/repo` into its two components.
pub fn split_identifier(identifier: &str) -> Result<(&str, &str)> {
    match identifier.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner, repo))
        }
        _ => Err(SuError::InvalidIdentifier(identifier.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_version_prefix_removes_single_v() {
        assert_eq!(strip_version_prefix("v1.2.3"), "1.2.3");
        assert_eq!(strip_version_prefix("2.0.0"), "2.0.0");
        assert_eq!(strip_version_prefix("vv1"), "v1");
        assert_eq!(strip_version_prefix("V1.0"), "V1.0");
        assert_eq!(strip_version_prefix("release-v1"), "release-v1");
        assert_eq!(strip_version_prefix("v"), "");
    }

    #[test]
    fn release_info_version_strips_tag() {
        let info = ReleaseInfo {
            tag_name: "v0.24.0".into(),
            name: Some("bat 0.24.0".into()),
            body: None,
            html_url: None,
        };
        assert_eq!(info.version(), "0.24.0");
    }

    #[test]
    fn split_identifier_accepts_owner_repo() {
        assert_eq!(split_identifier("sharkdp/bat").unwrap(), ("sharkdp", "bat"));
    }

    #[test]
    fn split_identifier_rejects_malformed() {
        for bad in ["bat", "", "/bat", "sharkdp/", "/", "a/b/c"] {
            let err = split_identifier(bad).unwrap_err();
            assert!(
                matches!(err, SuError::InvalidIdentifier(ref id) if id == bad),
                "{bad:?} gave {err:?}"
            );
        }
    }
}
