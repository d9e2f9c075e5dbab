//! Configuration loading and management

use std::path::PathBuf;

use crate::store::StoreError;

/// Environment variable overriding the data directory
const DATA_DIR_ENV: &str = "SHORTCUT_HINTS_DATA_DIR";

/// Crate configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for persisted UI state
    pub data_dir: PathBuf,

    /// Path to the seen-flag storage file
    pub seen_flag_path: PathBuf,
}

impl Config {
    /// Load configuration from environment and defaults
    pub fn load() -> Result<Self, StoreError> {
        let data_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => {
                let home = std::env::var("HOME").map_err(|_| StoreError::Unavailable)?;
                PathBuf::from(home)
                    .join(".local")
                    .join("share")
                    .join("shortcut-hints")
            }
        };

        let seen_flag_path = data_dir.join("ui-state.json");

        Ok(Self {
            data_dir,
            seen_flag_path,
        })
    }

    /// Ensure data directory exists
    pub fn ensure_dirs(&self) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}
