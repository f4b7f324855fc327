//! Per-invocation application context.

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::releases::GitHubReleases;
use crate::store::VersionStore;

/// Everything a command needs: resolved settings, the store handle and the
/// selected output format.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub store: VersionStore,
    pub output_format: OutputFormat,
}

impl AppContext {
    /// Load settings and apply the command-line overrides on top.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Config::load(cli.config.as_deref())?;
        if let Some(path) = &cli.store {
            config.store.path = Some(path.clone());
        }
        if let Some(api_base) = &cli.api_base {
            config.github.api_base.clone_from(api_base);
        }
        Ok(Self::new(config, cli.output_format()))
    }

    #[must_use]
    pub fn new(config: Config, output_format: OutputFormat) -> Self {
        let store = VersionStore::new(config.store_path());
        tracing::debug!(store = %store.path().display(), api_base = %config.github.api_base, "context ready");
        Self {
            config,
            store,
            output_format,
        }
    }

    /// Release client built from the resolved settings.
    pub fn releases(&self) -> Result<GitHubReleases> {
        GitHubReleases::from_config(&self.config.github)
    }

    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.output_format.is_machine_readable()
    }
}
