//! Configuration loading and typed config structures for Canopy.
//!
//! The canonical configuration lives in `canopy-config.yaml`. Every field
//! has a default, so an empty file (or no file at all) yields a playable
//! daily-cap forest.

use std::path::{Path, PathBuf};

use canopy_types::GrowthPolicy;
use canopy_world::{GrowthRules, MATURITY_BONUS, PlantingDefaults};
use serde::Deserialize;
use tracing::warn;

/// Environment variable overriding `checkin.store_path`.
pub const CHECKIN_PATH_ENV: &str = "CANOPY_CHECKIN_PATH";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CanopyConfig {
    /// Which forest the session runs.
    #[serde(default)]
    pub session: SessionConfig,

    /// Growth and scoring rules.
    #[serde(default)]
    pub growth: GrowthConfig,

    /// Fallback metadata for planted trees.
    #[serde(default)]
    pub planting: PlantingDefaults,

    /// Check-in persistence.
    #[serde(default)]
    pub checkin: CheckInConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CanopyConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `CANOPY_CHECKIN_PATH` overrides `checkin.store_path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.checkin.apply_env_overrides();
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or
    /// parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::from_file(path);
        }
        warn!(path = %path.display(), "Config file not found, using defaults");
        let mut config = Self::default();
        config.checkin.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Session selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Growth policy of the forest.
    #[serde(default)]
    pub policy: GrowthPolicy,
}

/// Growth and scoring rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GrowthConfig {
    /// Score added when a tree first matures.
    #[serde(default = "default_maturity_bonus")]
    pub maturity_bonus: u32,

    /// Allow at most one daily-cap watering per country per day.
    #[serde(default = "default_true")]
    pub enforce_daily_cap: bool,

    /// Score at which the planet health bar is full.
    #[serde(default = "default_score_target")]
    pub score_target: u32,
}

impl GrowthConfig {
    /// Rules handed to the state machine.
    pub const fn rules(&self) -> GrowthRules {
        GrowthRules {
            maturity_bonus: self.maturity_bonus,
            enforce_daily_cap: self.enforce_daily_cap,
        }
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            maturity_bonus: default_maturity_bonus(),
            enforce_daily_cap: true,
            score_target: default_score_target(),
        }
    }
}

/// Check-in persistence configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckInConfig {
    /// File holding the last check-in date. `None` keeps it in memory.
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

impl CheckInConfig {
    /// Apply `CANOPY_CHECKIN_PATH` if set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(CHECKIN_PATH_ENV)
            && !val.trim().is_empty()
        {
            self.store_path = Some(PathBuf::from(val));
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

const fn default_maturity_bonus() -> u32 {
    MATURITY_BONUS
}

const fn default_score_target() -> u32 {
    100
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_owned()
}
