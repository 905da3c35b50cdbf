//! User settings for cashflow-cli
//!
//! Holds the knobs of the cash-flow heuristic (which accounts count as cash)
//! plus report defaults. The cash hints and the sentinel account number are
//! assumptions about one particular chart of accounts, which is exactly why
//! they live in the config file instead of the classifier.

use serde::{Deserialize, Serialize};

use super::paths::CashflowPaths;
use crate::error::CashflowError;
use crate::reports::cash_flow::{CashAccountMatcher, DEFAULT_CASH_ACCOUNT_NO, DEFAULT_CASH_HINTS};

/// User settings for cashflow-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Account-name fragments that mark a journal line as cash-like
    #[serde(default = "default_cash_hints")]
    pub cash_account_hints: Vec<String>,

    /// Account number that always counts as the cash account
    #[serde(default = "default_cash_account_number")]
    pub cash_account_number: String,

    /// Report window when no --from is given, in days ending today
    #[serde(default = "default_window_days")]
    pub default_window_days: u32,

    /// Fallback currency code when the payload carries none
    #[serde(default = "default_currency_code")]
    pub currency_code: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_cash_hints() -> Vec<String> {
    DEFAULT_CASH_HINTS.iter().map(|h| h.to_string()).collect()
}

fn default_cash_account_number() -> String {
    DEFAULT_CASH_ACCOUNT_NO.to_string()
}

fn default_window_days() -> u32 {
    30
}

fn default_currency_code() -> String {
    "USD".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            cash_account_hints: default_cash_hints(),
            cash_account_number: default_cash_account_number(),
            default_window_days: default_window_days(),
            currency_code: default_currency_code(),
        }
    }
}

impl Settings {
    /// Materialize the configured cash-detection heuristic
    pub fn cash_matcher(&self) -> CashAccountMatcher {
        CashAccountMatcher::new(
            self.cash_account_hints.clone(),
            self.cash_account_number.clone(),
        )
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CashflowPaths) -> Result<Self, CashflowError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CashflowError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| CashflowError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CashflowPaths) -> Result<(), CashflowError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CashflowError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| CashflowError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChartOfAccount;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings_match_classifier_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.cash_account_hints.len(), 3);
        assert_eq!(settings.cash_account_number, "1000");
        assert_eq!(settings.default_window_days, 30);

        let matcher = settings.cash_matcher();
        let bank = ChartOfAccount::new("1100", "Bank", "Current Asset", "Balance Sheet");
        assert!(matcher.is_cash_account(&bank));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.cash_account_hints = vec!["treasury".to_string()];
        settings.cash_account_number = "1010".to_string();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.cash_account_hints, vec!["treasury".to_string()]);
        assert_eq!(loaded.cash_account_number, "1010");
    }

    #[test]
    fn test_load_missing_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.cash_account_number, "1000");
    }

    #[test]
    fn test_partial_config_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{ "default_window_days": 7 }"#).unwrap();
        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.default_window_days, 7);
        assert_eq!(settings.cash_account_hints.len(), 3);
    }
}
