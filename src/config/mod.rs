//! Configuration module for smartsearch
//!
//! Manages the search widget defaults, the record file to search and the
//! log level. Configuration is stored in the user's config directory:
//!
//! ```toml
//! data_file = "/home/me/records.json"
//! log_level = "warn"
//!
//! [search]
//! debounce_ms = 300
//! min_search_length = 1
//! max_results = 10
//! search_on_submit = false
//! results_display_mode = "dropdown"
//! group_by = "category"
//! ```

use crate::record::GroupField;
use crate::widget::{
    DEFAULT_DEBOUNCE, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SEARCH_LENGTH, DisplayMode, SearchOptions,
};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Search widget defaults
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SearchSettings {
    /// Quiet period before a typed query is searched, in milliseconds
    pub debounce_ms: u64,

    /// Trimmed queries shorter than this show no results
    pub min_search_length: usize,

    /// Maximum number of visible results
    pub max_results: usize,

    /// Search only when Enter is pressed
    pub search_on_submit: bool,

    /// `dropdown` or `cards`
    pub results_display_mode: DisplayMode,

    /// Optional grouping field (`category`, `status`, `metadata.<key>`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupField>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: u64::try_from(DEFAULT_DEBOUNCE.as_millis()).unwrap_or(300),
            min_search_length: DEFAULT_MIN_SEARCH_LENGTH,
            max_results: DEFAULT_MAX_RESULTS,
            search_on_submit: false,
            results_display_mode: DisplayMode::Dropdown,
            group_by: None,
        }
    }
}

impl From<&SearchSettings> for SearchOptions {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            debounce: Duration::from_millis(settings.debounce_ms),
            min_search_length: settings.min_search_length,
            max_results: settings.max_results,
            search_on_submit: settings.search_on_submit,
            display_mode: settings.results_display_mode,
            group_by: settings.group_by.clone(),
            ..Self::default()
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SmartSearchConfig {
    /// Widget defaults
    #[serde(default)]
    pub search: SearchSettings,

    /// JSON record file searched when `--data` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SmartSearchConfig {
    fn default() -> Self {
        Self {
            search: SearchSettings::default(),
            data_file: None,
            log_level: default_log_level(),
        }
    }
}

impl SmartSearchConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("smartsearch").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            tracing::info!(path = %path.display(), "created default configuration");
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Widget options derived from the `[search]` section
    #[must_use]
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::from(&self.search)
    }
}
