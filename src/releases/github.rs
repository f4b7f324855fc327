//! GitHub REST client for `GET /repos/{owner}/{repo}/releases/latest`.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;

use super::{ReleaseInfo, ReleaseSource, split_identifier};
use crate::config::GitHubConfig;
use crate::error::{Result, SuError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the latest-release endpoint.
///
/// Each lookup issues exactly one request: no retries, no caching.
#[derive(Debug, Clone)]
pub struct GitHubReleases {
    client: reqwest::blocking::Client,
    api_base: String,
    user_agent: String,
}

impl GitHubReleases {
    /// Client against `api_base` with the default user agent and timeout.
    pub fn new(api_base: impl Into<String>) -> Result<Self> {
        Self::build(api_base.into(), super::USER_AGENT.to_string(), Some(DEFAULT_TIMEOUT))
    }

    pub fn from_config(config: &GitHubConfig) -> Result<Self> {
        let timeout = (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs));
        Self::build(config.api_base.clone(), config.user_agent.clone(), timeout)
    }

    fn build(api_base: String, user_agent: String, timeout: Option<Duration>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SuError::Config(format!("HTTP client error: {e}")))?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            user_agent,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Latest-release URL for `identifier`.
    #[must_use]
    pub fn endpoint(&self, identifier: &str) -> String {
        format!("{}/repos/{identifier}/releases/latest", self.api_base)
    }

    /// Fetch the latest published release for `identifier`.
    pub fn latest_release(&self, identifier: &str) -> Result<ReleaseInfo> {
        split_identifier(identifier)?;
        let url = self.endpoint(identifier);
        tracing::debug!(%identifier, %url, "fetching latest release");

        let network_err = |source: reqwest::Error| SuError::Network {
            identifier: identifier.to_string(),
            url: url.clone(),
            source,
        };
        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, super::ACCEPT)
            .send()
            .map_err(network_err)?;
        let status = response.status();
        let body = response.text().map_err(network_err)?;
        tracing::debug!(%identifier, status = status.as_u16(), bytes = body.len(), "release API responded");

        if status != StatusCode::OK {
            let upstream: ApiErrorBody = serde_json::from_str(&body).unwrap_or_default();
            return Err(SuError::Api {
                identifier: identifier.to_string(),
                url,
                status: status.as_u16(),
                message: upstream.message.filter(|m| !m.is_empty()),
                documentation_url: upstream.documentation_url.filter(|u| !u.is_empty()),
            });
        }

        let release: GitHubRelease =
            serde_json::from_str(&body).map_err(|source| SuError::Decode {
                identifier: identifier.to_string(),
                url: url.clone(),
                source,
            })?;

        let Some(tag_name) = release.tag_name.filter(|tag| !tag.is_empty()) else {
            return Err(SuError::MissingTag {
                identifier: identifier.to_string(),
                url,
            });
        };

        Ok(ReleaseInfo {
            tag_name,
            name: release.name,
            body: release.body,
            html_url: release.html_url,
        })
    }
}

impl ReleaseSource for GitHubReleases {
    fn latest_version(&self, identifier: &str) -> Result<String> {
        let release = self.latest_release(identifier)?;
        Ok(release.version().to_string())
    }
}

#[derive(Debug, Deserialize)]
struct GitHubRelease {
    tag_name: Option<String>,
    name: Option<String>,
    body: Option<String>,
    html_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    documentation_url: Option<String>,
}
