//! # Configuration State
//!
//! Calculator settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PRINTQUOTE_CURRENCY_SYMBOL=€                                       │
//! │     PRINTQUOTE_MARKUP=25                                               │
//! │     PRINTQUOTE_STRICT=false                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/calculator/calculator.toml (Linux)                       │
//! │     ~/Library/Application Support/com.printquote.calculator/ (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     USD, form defaults, strict validation                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [currency]
//! symbol = "$"
//! grouping = true
//!
//! [defaults]
//! materialCostPerKg = 24.0
//! operatorRatePerHour = 45
//! markupPercent = 30
//!
//! [validation]
//! strict = true
//!
//! [export]
//! directory = "/home/me/quotes"
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use printquote_core::{CurrencyFormat, QuoteParameters};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::project_dirs;

/// File name of the calculator config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "calculator.toml";

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// Boundary validation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationSettings {
    /// Reject out-of-range inputs before computing.
    ///
    /// `false` keeps the permissive behavior: any number is computed and
    /// degenerate inputs show up as ∞ or NaN in the quote.
    pub strict: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        ValidationSettings { strict: true }
    }
}

/// Quote file export settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportSettings {
    /// Directory for exported quotes. Current directory when unset.
    pub directory: Option<PathBuf>,
}

// =============================================================================
// Config State
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigState {
    /// Money display format.
    pub currency: CurrencyFormat,

    /// Initial form values, used for every input not given explicitly.
    pub defaults: QuoteParameters,

    pub validation: ValidationSettings,

    pub export: ExportSettings,
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, else the platform config dir)
    /// 3. Environment variables
    /// 4. Validation
    ///
    /// `[defaults]` values are not range-checked here: they only matter
    /// once they end up in a parameter snapshot, and that snapshot is
    /// validated as a whole before computing.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading calculator config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.currency.symbol.trim().is_empty() {
            return Err(ConfigError::InvalidValue("currency.symbol".to_string()));
        }

        Ok(())
    }

    /// Applies `PRINTQUOTE_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = lookup("PRINTQUOTE_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.currency.symbol = symbol;
        }

        if let Some(markup) = lookup("PRINTQUOTE_MARKUP") {
            self.defaults.markup_percent = markup
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PRINTQUOTE_MARKUP".to_string()))?;
        }

        if let Some(strict) = lookup("PRINTQUOTE_STRICT") {
            match strict.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.validation.strict = true,
                "0" | "false" | "no" | "off" => self.validation.strict = false,
                _ => warn!(value = %strict, "Unknown PRINTQUOTE_STRICT value, ignoring"),
            }
        }

        if let Some(dir) = lookup("PRINTQUOTE_EXPORT_DIR") {
            self.export.directory = Some(PathBuf::from(dir));
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
