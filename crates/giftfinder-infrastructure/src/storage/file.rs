//! File-backed key-value storage.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use giftfinder_core::error::Result;

use super::KeyValueStorage;
use crate::paths::GiftFinderPaths;

/// Key-value storage keeping one `<key>.json` file per key.
///
/// Writes go through a temp file and an atomic rename, so a crash
/// mid-write leaves the previous value intact rather than a torn record.
pub struct FileKeyValueStorage {
    base_dir: PathBuf,
}

impl FileKeyValueStorage {
    /// Creates a storage rooted at the platform data directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            base_dir: GiftFinderPaths::data_dir()?,
        })
    }

    /// Creates a storage rooted at a custom directory (for testing).
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;

        let path = self.key_path(key);
        let tmp_path = self.base_dir.join(format!("{key}.json.tmp"));
        {
            let mut tmp = File::create(&tmp_path)?;
            tmp.write_all(value.as_bytes())?;
            tmp.sync_all()?;
        }
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
