//! Path management for Outset
//!
//! Resolves where configuration, the committed plan, and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `OUTSET_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories::ProjectDirs`
//!    (Linux: `~/.config/outset`, macOS: `~/Library/Application Support`,
//!    Windows: `%APPDATA%`)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::OutsetError;

/// Manages all paths used by Outset
#[derive(Debug, Clone)]
pub struct OutsetPaths {
    /// Base directory for all Outset data
    base_dir: PathBuf,
}

impl OutsetPaths {
    /// Create an OutsetPaths instance using the default resolution order
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, OutsetError> {
        let base_dir = match std::env::var("OUTSET_DATA_DIR") {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => ProjectDirs::from("", "", "outset")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    OutsetError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create OutsetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the committed budget plan
    pub fn plan_file(&self) -> PathBuf {
        self.data_dir().join("plan.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), OutsetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| OutsetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| OutsetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Outset has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
