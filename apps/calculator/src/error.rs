//! # API Error Type
//!
//! Unified error type for calculator commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in PrintQuote                             │
//! │                                                                         │
//! │  ValidationError ──┐                                                    │
//! │  (printquote-core) │                                                    │
//! │                    │                                                    │
//! │  ConfigError ──────┼──► From ──► ApiError { code, message }             │
//! │  PrefsError ───────┤                    │                               │
//! │  std::io (export) ─┘                    ▼                               │
//! │                            main: print, exit 1 (validation) / 2         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine itself never fails; every error here comes from an input
//! boundary or from the filesystem.

use printquote_core::ValidationError;
use serde::Serialize;

use crate::state::{ConfigError, PrefsError};

/// API error returned from commands.
///
/// ## Serialization
/// Printed as JSON under `--json`:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Units Per Batch must be at least 1"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Config file or environment override is invalid
    ConfigError,

    /// Theme preference could not be read or written
    PreferencesError,

    /// Quote file could not be written
    ExportError,

    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an export error.
    pub fn export(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ExportError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self.code {
            ErrorCode::ValidationError => 1,
            _ => 2,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<PrefsError> for ApiError {
    fn from(err: PrefsError) -> Self {
        tracing::error!("Preference persistence failed: {}", err);
        ApiError::new(ErrorCode::PreferencesError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(format!("Failed to serialize response: {}", err))
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::internal(format!("Failed to serialize config: {}", err))
    }
}

/// Failures writing to stdout.
impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::internal(format!("Failed to write output: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
