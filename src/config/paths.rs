//! Path management for cashflow-cli
//!
//! Provides XDG-compliant path resolution for configuration.
//!
//! ## Path Resolution Order
//!
//! 1. `CASHFLOW_CLI_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/cashflow-cli` or `~/.config/cashflow-cli`
//! 3. Windows: `%APPDATA%\cashflow-cli`

use std::path::PathBuf;

use crate::error::CashflowError;

/// Manages all paths used by cashflow-cli
#[derive(Debug, Clone)]
pub struct CashflowPaths {
    /// Base directory for all cashflow-cli configuration
    base_dir: PathBuf,
}

impl CashflowPaths {
    /// Create a new CashflowPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CashflowError> {
        let base_dir = if let Ok(custom) = std::env::var("CASHFLOW_CLI_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CashflowPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/cashflow-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_directories(&self) -> Result<(), CashflowError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CashflowError::Io(format!("Failed to create config directory: {}", e)))?;

        Ok(())
    }

    /// Check if cashflow-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default configuration directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CashflowError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| CashflowError::Config("HOME environment variable not set".into()))
        })?;
    Ok(config_base.join("cashflow-cli"))
}

/// Resolve the default configuration directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CashflowError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CashflowError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("cashflow-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("CASHFLOW_CLI_CONFIG_DIR", custom_path);

        let paths = CashflowPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("CASHFLOW_CLI_CONFIG_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("deep").join("config");
        let paths = CashflowPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
        assert!(!paths.is_initialized());
    }
}
