use std::path::PathBuf;

use tempfile::TempDir;

use crate::store::{VersionStore, Versions};

/// Test fixture providing an isolated version store.
pub struct StoreFixture {
    pub temp_dir: TempDir,
    pub store_path: PathBuf,
}

impl StoreFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store_path = temp_dir.path().join("config").join("versions.toml");

        println!("[FIXTURE] Created temp directory: {:?}", temp_dir.path());

        Self {
            temp_dir,
            store_path,
        }
    }

    /// Store handle pointing into the fixture directory.
    pub fn store(&self) -> VersionStore {
        VersionStore::new(&self.store_path)
    }

    /// Seed the store with `pairs`.
    pub fn seed(&self, pairs: &[(&str, &str)]) -> Versions {
        let versions: Versions = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        self.store()
            .save(&versions)
            .expect("Failed to seed version store");
        println!("[FIXTURE] Seeded {} versions", versions.len());
        versions
    }
}

impl Drop for StoreFixture {
    fn drop(&mut self) {
        println!(
            "[FIXTURE] Cleaning up temp directory: {:?}",
            self.temp_dir.path()
        );
    }
}
