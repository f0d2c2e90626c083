//! Configuration module for seekr
//!
//! Manages switcher settings: timing, default filters, ranking policy, the
//! link base URL and an optional catalog file. Configuration is stored in
//! the user's config directory (`~/.config/seekr/config.toml` on Linux) and
//! created with defaults on first run.
//!
//! ```toml
//! quiet = false
//! link_base_url = "https://example.com"
//!
//! [timing]
//! opening_delay_ms = 50
//! typing_debounce_ms = 1000
//! copied_indicator_ms = 2000
//!
//! [filters]
//! files = true
//! people = true
//! chats = false
//! lists = false
//!
//! [ranking]
//! include_contains = true
//! drop_unmatched = false
//! ```

use crate::actions::DEFAULT_BASE_URL;
use crate::filters::FilterSet;
use crate::search::RankPolicy;
use crate::session::Timing;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Delays, in milliseconds
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between the first keystroke and showing results
    pub opening_delay_ms: u64,
    /// Pause in typing before results are shown again
    pub typing_debounce_ms: u64,
    /// How long the "copied" marker stays on a record
    pub copied_indicator_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            opening_delay_ms: 50,
            typing_debounce_ms: 1000,
            copied_indicator_ms: 2000,
        }
    }
}

impl TimingConfig {
    /// Session timing derived from these settings
    #[must_use]
    pub const fn session_timing(&self) -> Timing {
        Timing {
            opening_delay: Duration::from_millis(self.opening_delay_ms),
            typing_debounce: Duration::from_millis(self.typing_debounce_ms),
        }
    }

    #[must_use]
    pub const fn copied_indicator(&self) -> Duration {
        Duration::from_millis(self.copied_indicator_ms)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SeekrConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Base for file, folder and fallback links
    #[serde(default = "default_base_url")]
    pub link_base_url: String,

    /// Catalog file to load instead of the built-in records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    #[serde(default)]
    pub timing: TimingConfig,

    /// Groups enabled when a session starts
    #[serde(default)]
    pub filters: FilterSet,

    #[serde(default)]
    pub ranking: RankPolicy,
}

impl Default for SeekrConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            link_base_url: default_base_url(),
            catalog: None,
            timing: TimingConfig::default(),
            filters: FilterSet::default(),
            ranking: RankPolicy::default(),
        }
    }
}

impl SeekrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("seekr").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_create(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it does not exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }
        Self::load_from(path)
    }

    /// Load configuration from an existing file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render the configuration as TOML for display
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}
