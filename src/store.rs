//! Version store.
//!
//! Persists the tracked applications as a flat TOML table mapping an
//! identifier to the version the user last recorded:
//!
//! ```toml
//! "sharkdp/bat" = "0.24.0"
//! "BurntSushi/ripgrep" = "14.1.0"
//! ```
//!
//! Every mutation rewrites the whole file. Writes go through a temporary file
//! in the same directory which is then renamed over the target.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Result, SuError};

/// Identifier -> recorded version, iterated in sorted-identifier order.
pub type Versions = BTreeMap<String, String>;

/// Handle to the TOML file backing the tracked versions.
#[derive(Debug, Clone)]
pub struct VersionStore {
    path: PathBuf,
}

impl VersionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the backing file.
    ///
    /// A missing file is the normal state before the first `add` and yields
    /// an empty map.
    pub fn load(&self) -> Result<Versions> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "version file not found; it will be created on first add"
                );
                return Ok(Versions::new());
            }
            Err(source) => {
                return Err(SuError::StoreRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let versions: Versions = toml::from_str(&raw).map_err(|source| SuError::StoreParse {
            path: self.path.clone(),
            source,
        })?;
        if versions.keys().any(|name| name.trim().is_empty()) {
            return Err(SuError::StoreInvalid {
                path: self.path.clone(),
                reason: "application names must not be empty".to_string(),
            });
        }
        tracing::debug!(path = %self.path.display(), count = versions.len(), "loaded versions");
        Ok(versions)
    }

    /// Overwrite the backing file with `versions`, creating parent
    /// directories as needed.
    pub fn save(&self, versions: &Versions) -> Result<()> {
        let raw = toml::to_string(versions).map_err(SuError::StoreSerialize)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|source| SuError::StoreDir {
            path: dir.clone(),
            source,
        })?;

        let write_err = |source: io::Error| SuError::StoreWrite {
            path: self.path.clone(),
            source,
        };
        let mut temp = NamedTempFile::new_in(&dir).map_err(write_err)?;
        temp.write_all(raw.as_bytes()).map_err(write_err)?;
        temp.flush().map_err(write_err)?;
        temp.persist(&self.path).map_err(|err| write_err(err.error))?;

        tracing::debug!(path = %self.path.display(), count = versions.len(), "saved versions");
        Ok(())
    }

    /// Record `version` for `name`, returning the version it replaced.
    pub fn upsert(&self, name: &str, version: &str) -> Result<Option<String>> {
        if name.trim().is_empty() {
            return Err(SuError::ValidationFailed(
                "application name must not be empty".to_string(),
            ));
        }
        if version.trim().is_empty() {
            return Err(SuError::ValidationFailed(format!(
                "version for '{name}' must not be empty"
            )));
        }

        let mut versions = self.load()?;
        let previous = versions.insert(name.to_string(), version.to_string());
        self.save(&versions)?;
        Ok(previous)
    }

    /// Stop tracking `name`. The file is left untouched when `name` was not
    /// tracked.
    pub fn remove(&self, name: &str) -> Result<Option<String>> {
        let mut versions = self.load()?;
        let Some(previous) = versions.remove(name) else {
            return Ok(None);
        };
        self.save(&versions)?;
        Ok(Some(previous))
    }
}
