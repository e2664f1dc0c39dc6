//! Application configuration.
//!
//! Loaded from `<config_dir>/giftfinder/config.toml`. A missing file or an
//! unresolvable config directory yields the defaults; a file that exists
//! but cannot be parsed is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use giftfinder_core::error::Result;
use giftfinder_core::gift::DEFAULT_RESULT_COUNT;

use crate::paths::GiftFinderPaths;

/// Top-level configuration for the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides where durable key files live. Defaults to the platform
    /// data directory.
    pub storage_dir: Option<PathBuf>,
    /// Number of products requested per search.
    pub result_page_size: usize,
    /// Gates the fire-and-forget remote history sync.
    pub remote_sync: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            result_page_size: DEFAULT_RESULT_COUNT,
            remote_sync: true,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from the default path.
    pub fn load() -> Result<Self> {
        let path = match GiftFinderPaths::config_file() {
            Ok(path) => path,
            // No resolvable config dir: run on defaults.
            Err(_) => return Ok(Self::default()),
        };
        Self::load_from(&path)
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = toml::from_str(&content)?;
        Ok(config)
    }
}
