//! # Settings Module
//!
//! ## Purpose
//! Centralized management of the formula parser policy. The parser itself is a pure
//! function of its `ParserSettings`; this module only owns how those settings are
//! persisted and shared by the terminal front end.
//!
//! ## Architecture
//! - **ParserSettings**: Serializable policy structure
//! - **SettingsManager**: Loads, validates and persists the policy
//! - **Global Access**: Thread-safe singleton via `OnceLock<Mutex<_>>`
//! - **Configuration File**: JSON-based persistent storage (chemcalc_config.json)
//!
//! ## Configuration Format
//! ```json
//! {
//!   "strict": true,
//!   "merge_duplicates": true,
//!   "decimal_places": 3
//! }
//! ```
//!
//! ## Usage Patterns
//! ```rust
//! use ChemCalc::settings::with_settings;
//!
//! let strict = with_settings(|manager| manager.settings().strict);
//! ```

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Default name of the configuration file in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "chemcalc_config.json";

const MAX_DECIMAL_PLACES: usize = 12;

/// Policy of the formula parser and of result presentation.
///
/// # Fields
/// * `strict` - reject characters the formula grammar does not cover (otherwise skip them)
/// * `merge_duplicates` - sum counts of a symbol that appears more than once
/// * `decimal_places` - rounding used when results are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    pub strict: bool,
    pub merge_duplicates: bool,
    pub decimal_places: usize,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            strict: true,
            merge_duplicates: true,
            decimal_places: 3,
        }
    }
}

/// Loads and persists `ParserSettings`.
///
/// # Fields
/// * `settings` - Current policy
/// * `config_file` - Path to the configuration file for persistence
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings: ParserSettings,
    config_file: String,
}

impl SettingsManager {
    /// Creates a manager bound to `chemcalc_config.json` in the current directory.
    /// Missing or invalid files give the default settings.
    pub fn new() -> Self {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    /// Creates a manager with a custom configuration file path.
    ///
    /// # Arguments
    /// * `config_file` - Path to the configuration file
    pub fn with_config_file(config_file: &str) -> Self {
        let settings = match Self::load_config(config_file) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(
                    "could not read settings from {}: {}, using defaults",
                    config_file, e
                );
                ParserSettings::default()
            }
        };

        Self {
            settings,
            config_file: config_file.to_string(),
        }
    }

    /// Reads the configuration file.
    ///
    /// # Returns
    /// * `Ok(ParserSettings)` - Loaded settings, or defaults when the file does not exist
    /// * `Err(Box<dyn std::error::Error>)` - On I/O or JSON errors
    fn load_config(config_file: &str) -> Result<ParserSettings, Box<dyn std::error::Error>> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let settings: ParserSettings = serde_json::from_str(&content)?;
            info!("settings loaded from {}", config_file);
            Ok(settings)
        } else {
            Ok(ParserSettings::default())
        }
    }

    /// Writes current settings to the config file.
    /// During tests, this method does nothing to keep the working directory clean.
    pub fn save_config(&self) -> Result<(), Box<dyn std::error::Error>> {
        #[cfg(test)]
        {
            return Ok(());
        }

        #[cfg(not(test))]
        {
            let content = serde_json::to_string_pretty(&self.settings)?;
            fs::write(&self.config_file, content)?;
            info!("settings saved to {}", self.config_file);
            Ok(())
        }
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    pub fn set_strict(&mut self, strict: bool) -> Result<(), Box<dyn std::error::Error>> {
        self.settings.strict = strict;
        self.save_config()
    }

    pub fn set_merge_duplicates(
        &mut self,
        merge_duplicates: bool,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.settings.merge_duplicates = merge_duplicates;
        self.save_config()
    }

    /// Updates display rounding, at most 12 decimal places.
    pub fn set_decimal_places(
        &mut self,
        decimal_places: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if decimal_places > MAX_DECIMAL_PLACES {
            return Err(format!(
                "Too many decimal places: {} (max {})",
                decimal_places, MAX_DECIMAL_PLACES
            )
            .into());
        }
        self.settings.decimal_places = decimal_places;
        self.save_config()
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.settings = ParserSettings::default();
        self.save_config()
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_SETTINGS_MANAGER: OnceLock<Mutex<SettingsManager>> = OnceLock::new();

/// Returns a guard to the global SettingsManager.
///
/// # Panics
/// Panics if the mutex is poisoned (should not happen in normal operation)
pub fn get_settings_manager() -> MutexGuard<'static, SettingsManager> {
    GLOBAL_SETTINGS_MANAGER
        .get_or_init(|| Mutex::new(SettingsManager::new()))
        .lock()
        .unwrap()
}

/// Executes a closure with read-only access to the SettingsManager.
pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&SettingsManager) -> R,
{
    let manager = get_settings_manager();
    f(&*manager)
}

/// Executes a closure with mutable access to the SettingsManager.
///
/// # Example
/// ```rust,no_run
/// use ChemCalc::settings::with_settings_mut;
/// let result = with_settings_mut(|manager| manager.set_decimal_places(4));
/// assert!(result.is_ok());
/// ```
pub fn with_settings_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut SettingsManager) -> R,
{
    let mut manager = get_settings_manager();
    f(&mut *manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_file_missing() {
        let manager = SettingsManager::with_config_file("no_such_chemcalc_config.json");
        assert_eq!(*manager.settings(), ParserSettings::default());
        assert!(manager.settings().strict);
        assert!(manager.settings().merge_duplicates);
        assert_eq!(manager.settings().decimal_places, 3);
    }

    #[test]
    fn test_with_config_file() {
        let mut temp_config = NamedTempFile::new().unwrap();
        let settings = ParserSettings {
            strict: false,
            merge_duplicates: false,
            decimal_places: 5,
        };
        let config_json = serde_json::to_string_pretty(&settings).unwrap();
        temp_config.write_all(config_json.as_bytes()).unwrap();

        let manager = SettingsManager::with_config_file(temp_config.path().to_str().unwrap());
        assert_eq!(*manager.settings(), settings);
        assert_eq!(
            manager.config_file(),
            temp_config.path().to_str().unwrap()
        );
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let mut temp_config = NamedTempFile::new().unwrap();
        temp_config.write_all(br#"{ "strict": false }"#).unwrap();

        let manager = SettingsManager::with_config_file(temp_config.path().to_str().unwrap());
        assert!(!manager.settings().strict);
        assert!(manager.settings().merge_duplicates);
        assert_eq!(manager.settings().decimal_places, 3);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let mut temp_config = NamedTempFile::new().unwrap();
        temp_config.write_all(b"not json at all").unwrap();

        let manager = SettingsManager::with_config_file(temp_config.path().to_str().unwrap());
        assert_eq!(*manager.settings(), ParserSettings::default());
    }

    #[test]
    fn test_setters_and_reset() {
        let temp_config = NamedTempFile::new().unwrap();
        let mut manager = SettingsManager::with_config_file(temp_config.path().to_str().unwrap());

        manager.set_strict(false).unwrap();
        manager.set_merge_duplicates(false).unwrap();
        manager.set_decimal_places(6).unwrap();
        assert_eq!(
            *manager.settings(),
            ParserSettings {
                strict: false,
                merge_duplicates: false,
                decimal_places: 6
            }
        );
        assert!(manager.set_decimal_places(40).is_err());
        assert_eq!(manager.settings().decimal_places, 6);

        manager.reset_to_defaults().unwrap();
        assert_eq!(*manager.settings(), ParserSettings::default());
    }
}
