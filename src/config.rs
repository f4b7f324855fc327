//! Settings.
//!
//! Defaults, overlaid by an optional TOML settings file, overlaid by
//! `SHOULDUPDATE_*` environment variables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SuError};

/// Directory name under the user's config directory.
pub const APP_DIR: &str = "shouldupdate";
/// File name of the version store.
pub const STORE_FILE: &str = "versions.toml";
/// File name of the optional settings file.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Load settings from `explicit_path`, `SHOULDUPDATE_CONFIG`, or the
    /// global settings file, then apply environment overrides.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(explicit_path, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with an explicit environment lookup.
    pub fn load_with_env<F>(explicit_path: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let path = explicit_path
            .map(PathBuf::from)
            .or_else(|| env("SHOULDUPDATE_CONFIG").map(PathBuf::from))
            .or_else(|| default_app_dir().map(|dir| dir.join(CONFIG_FILE)));

        if let Some(path) = path {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        }

        config.apply_env_overrides(&env)?;

        Ok(config)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file");
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| SuError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| SuError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.github {
            self.github.merge(patch);
        }
        if let Some(patch) = patch.store {
            self.store.merge(patch);
        }
    }

    fn apply_env_overrides<F>(&mut self, env: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = env("SHOULDUPDATE_API_BASE") {
            self.github.api_base = value;
        }
        if let Some(value) = env("SHOULDUPDATE_USER_AGENT") {
            self.github.user_agent = value;
        }
        if let Some(value) = env("SHOULDUPDATE_TIMEOUT_SECS") {
            self.github.timeout_secs = value.parse::<u64>().map_err(|err| {
                SuError::Config(format!(
                    "invalid SHOULDUPDATE_TIMEOUT_SECS value {value}: {err}"
                ))
            })?;
        }
        if let Some(value) = env("SHOULDUPDATE_STORE") {
            self.store.path = Some(PathBuf::from(value));
        }
        Ok(())
    }

    /// Path of the version store: the configured path, or
    /// `<config dir>/shouldupdate/versions.toml`.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        if let Some(path) = &self.store.path {
            return path.clone();
        }
        default_app_dir().map_or_else(
            || {
                tracing::warn!(
                    "could not determine the user config directory; using {STORE_FILE} in the current directory"
                );
                PathBuf::from(STORE_FILE)
            },
            |dir| dir.join(STORE_FILE),
        )
    }
}

/// `<config dir>/shouldupdate`, if the platform has a config directory.
#[must_use]
pub fn default_app_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds; `0` waits indefinitely.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    crate::releases::DEFAULT_API_BASE.to_string()
}

fn default_user_agent() -> String {
    crate::releases::USER_AGENT.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GitHubConfig {
    fn merge(&mut self, patch: GitHubPatch) {
        if let Some(value) = patch.api_base {
            self.api_base = value;
        }
        if let Some(value) = patch.user_agent {
            self.user_agent = value;
        }
        if let Some(value) = patch.timeout_secs {
            self.timeout_secs = value;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    fn merge(&mut self, patch: StorePatch) {
        if let Some(value) = patch.path {
            self.path = Some(value);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    github: Option<GitHubPatch>,
    store: Option<StorePatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct GitHubPatch {
    api_base: Option<String>,
    user_agent: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StorePatch {
    path: Option<PathBuf>,
}
