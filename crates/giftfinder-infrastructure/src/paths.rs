//! Unified path management for giftfinder files.
//!
//! All durable state and configuration resolve through here so every
//! storage mechanism agrees on locations across platforms.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/giftfinder/        # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/giftfinder/   # Data directory
//! ├── layout-state.json        # Persisted layout record
//! └── gift_finder_history.json # Search history record
//! ```

use std::path::PathBuf;

use giftfinder_core::error::{GiftError, Result};

const APP_DIR: &str = "giftfinder";

/// Unified path management for giftfinder.
pub struct GiftFinderPaths;

impl GiftFinderPaths {
    /// Returns the giftfinder configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| GiftError::config("cannot determine config directory"))
    }

    /// Returns the giftfinder data directory, used for durable state files.
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| GiftError::config("cannot determine data directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
