//! # Error Types
//!
//! Domain-specific error types for printquote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  printquote-core errors (this file)                                    │
//! │  └── ValidationError  - Input boundary failures                        │
//! │                                                                         │
//! │  calculator errors (app crate)                                         │
//! │  ├── ConfigError / PrefsError - File and environment failures          │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → Front end                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine never returns errors. Degenerate inputs produce infinite or
//! NaN amounts, so these types only appear at the validation boundary.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Field names use the human labels of the input form so the message can
/// be shown as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value is below the field's minimum.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: f64 },

    /// Value is above the field's maximum.
    #[error("{field} must be at most {max}")]
    AboveMaximum { field: String, max: f64 },

    /// Value must be a whole number.
    #[error("{field} must be a whole number")]
    NotAnInteger { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

impl ValidationError {
    /// Returns the label of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::BelowMinimum { field, .. }
            | ValidationError::AboveMaximum { field, .. }
            | ValidationError::NotAnInteger { field }
            | ValidationError::NotFinite { field } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::BelowMinimum {
            field: "Units Per Batch".to_string(),
            min: 1.0,
        };
        assert_eq!(err.to_string(), "Units Per Batch must be at least 1");

        let err = ValidationError::AboveMaximum {
            field: "Markup Percentage (%)".to_string(),
            max: 100.0,
        };
        assert_eq!(err.to_string(), "Markup Percentage (%) must be at most 100");

        let err = ValidationError::BelowMinimum {
            field: "Material Use per Unit (kg)".to_string(),
            min: 0.001,
        };
        assert_eq!(
            err.to_string(),
            "Material Use per Unit (kg) must be at least 0.001"
        );
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::NotAnInteger {
            field: "Total Units Required".to_string(),
        };
        assert_eq!(err.field(), "Total Units Required");
    }
}
