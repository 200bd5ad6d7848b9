//! User settings for Outset
//!
//! Manages user preferences including the budget period type, currency
//! symbol, and whether first-run setup has completed.

use serde::{Deserialize, Serialize};

use crate::error::OutsetError;
use crate::storage::file_io::write_json_atomic;

use super::paths::OutsetPaths;

/// Budget period type preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriodType {
    /// Monthly budgets (default)
    #[default]
    Monthly,
    /// Weekly budgets
    Weekly,
    /// Bi-weekly budgets
    BiWeekly,
}

/// User settings for Outset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// User's preferred budget period type
    #[serde(default)]
    pub budget_period_type: BudgetPeriodType,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether initial setup has been completed
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            budget_period_type: BudgetPeriodType::default(),
            currency_symbol: default_currency(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist
    pub fn load_or_create(paths: &OutsetPaths) -> Result<Self, OutsetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| OutsetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| OutsetError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let the caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OutsetPaths) -> Result<(), OutsetError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
