//! User settings for fintrack
//!
//! Manages display preferences and the persistence throttle interval.

use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;
use crate::storage::write_json_atomic;

/// User settings for fintrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Minimum time between two state writes, in milliseconds
    #[serde(default = "default_save_interval_ms")]
    pub save_interval_ms: u64,

    /// How many days ahead the recurring list flags items as upcoming
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: i64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_save_interval_ms() -> u64 {
    1000
}

fn default_upcoming_days() -> i64 {
    7
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            save_interval_ms: default_save_interval_ms(),
            upcoming_days: default_upcoming_days(),
        }
    }
}

impl Settings {
    /// The throttle interval as a Duration
    pub fn save_interval(&self) -> Duration {
        Duration::from_millis(self.save_interval_ms)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject values that would break formatting later
    pub fn validate(&self) -> Result<(), FinanceError> {
        let format = self.date_format.as_str();
        if format.trim().is_empty()
            || StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
        {
            return Err(FinanceError::Config(format!(
                "Invalid date format '{}' in settings file",
                format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        self.validate()?;
        paths.ensure_directories()?;

        write_json_atomic(paths.settings_file(), self)
    }
}
