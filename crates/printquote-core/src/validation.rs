//! # Validation Module
//!
//! Input boundary checks for the nine quote parameters.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input collector (CLI flags / form widgets)                   │
//! │  ├── Type validation (must parse as a number)                          │
//! │  └── Field hints from ParameterField::bounds() (min, max)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Finite values only                                                │
//! │  ├── Minimums and the markup maximum                                   │
//! │  └── Whole numbers for units per batch, total units, markup            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Engine: NO checks. Out-of-range input degrades to ∞ / NaN.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine stays permissive so a caller that skips this layer still
//! gets a (degenerate) quote instead of a crash.
//!
//! ## Usage
//! ```rust
//! use printquote_core::validation::validate_parameters;
//! use printquote_core::QuoteParameters;
//!
//! assert!(validate_parameters(&QuoteParameters::default()).is_ok());
//!
//! let zero_batch = QuoteParameters { units_per_batch: 0.0, ..QuoteParameters::default() };
//! assert!(validate_parameters(&zero_batch).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::QuoteParameters;
use crate::MAX_MARKUP_PERCENT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Catalogue
// =============================================================================

/// One of the nine quote inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterField {
    MaterialCostPerKg,
    MaterialUsePerUnitKg,
    UnitsPerBatch,
    TimePerBatchHours,
    OperatorTimePerBatchHours,
    OperatorRatePerHour,
    MachineDepreciationPerHour,
    TotalUnits,
    MarkupPercent,
}

/// Input limits for a single field.
///
/// Fractional input granularity is left to the input widget; whole-number
/// fields are enforced through `integer`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: Option<f64>,
    pub integer: bool,
}

impl ParameterField {
    /// All fields, in form order.
    pub const ALL: [ParameterField; 9] = [
        ParameterField::MaterialCostPerKg,
        ParameterField::MaterialUsePerUnitKg,
        ParameterField::UnitsPerBatch,
        ParameterField::TimePerBatchHours,
        ParameterField::OperatorTimePerBatchHours,
        ParameterField::OperatorRatePerHour,
        ParameterField::MachineDepreciationPerHour,
        ParameterField::TotalUnits,
        ParameterField::MarkupPercent,
    ];

    /// Label shown next to the input.
    pub const fn label(self) -> &'static str {
        match self {
            ParameterField::MaterialCostPerKg => "Material Cost ($/kg)",
            ParameterField::MaterialUsePerUnitKg => "Material Use per Unit (kg)",
            ParameterField::UnitsPerBatch => "Units Per Batch",
            ParameterField::TimePerBatchHours => "Time Per Batch (hours)",
            ParameterField::OperatorTimePerBatchHours => "Operator Time per Batch (hours)",
            ParameterField::OperatorRatePerHour => "Operator Rate ($/hour)",
            ParameterField::MachineDepreciationPerHour => "Machine Depreciation ($/hour)",
            ParameterField::TotalUnits => "Total Units Required",
            ParameterField::MarkupPercent => "Markup Percentage (%)",
        }
    }

    /// Input limits for this field.
    pub const fn bounds(self) -> FieldBounds {
        const fn real(min: f64) -> FieldBounds {
            FieldBounds {
                min,
                max: None,
                integer: false,
            }
        }

        match self {
            ParameterField::MaterialCostPerKg => real(0.0),
            ParameterField::MaterialUsePerUnitKg => real(0.001),
            ParameterField::UnitsPerBatch => FieldBounds {
                min: 1.0,
                max: None,
                integer: true,
            },
            ParameterField::TimePerBatchHours => real(0.1),
            ParameterField::OperatorTimePerBatchHours => real(0.0),
            ParameterField::OperatorRatePerHour => real(0.0),
            ParameterField::MachineDepreciationPerHour => real(0.0),
            ParameterField::TotalUnits => FieldBounds {
                min: 1.0,
                max: None,
                integer: true,
            },
            ParameterField::MarkupPercent => FieldBounds {
                min: 0.0,
                max: Some(MAX_MARKUP_PERCENT),
                integer: true,
            },
        }
    }

    /// Reads this field from a parameter snapshot.
    pub fn value(self, params: &QuoteParameters) -> f64 {
        match self {
            ParameterField::MaterialCostPerKg => params.material_cost_per_kg,
            ParameterField::MaterialUsePerUnitKg => params.material_use_per_unit_kg,
            ParameterField::UnitsPerBatch => params.units_per_batch,
            ParameterField::TimePerBatchHours => params.time_per_batch_hours,
            ParameterField::OperatorTimePerBatchHours => params.operator_time_per_batch_hours,
            ParameterField::OperatorRatePerHour => params.operator_rate_per_hour,
            ParameterField::MachineDepreciationPerHour => params.machine_depreciation_per_hour,
            ParameterField::TotalUnits => params.total_units,
            ParameterField::MarkupPercent => params.markup_percent,
        }
    }
}

// =============================================================================
// Validators
// =============================================================================

/// Validates a single field value against its bounds.
///
/// ## Check Order
/// 1. finite
/// 2. minimum
/// 3. maximum (markup only)
/// 4. whole number (integer fields only)
///
/// ## Example
/// ```rust
/// use printquote_core::validation::{validate_field, ParameterField};
///
/// assert!(validate_field(ParameterField::UnitsPerBatch, 4.0).is_ok());
/// assert!(validate_field(ParameterField::UnitsPerBatch, 2.5).is_err());
/// assert!(validate_field(ParameterField::MarkupPercent, 101.0).is_err());
/// ```
pub fn validate_field(field: ParameterField, value: f64) -> ValidationResult<()> {
    let bounds = field.bounds();
    let label = field.label();

    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: label.to_string(),
        });
    }

    if value < bounds.min {
        return Err(ValidationError::BelowMinimum {
            field: label.to_string(),
            min: bounds.min,
        });
    }

    if let Some(max) = bounds.max {
        if value > max {
            return Err(ValidationError::AboveMaximum {
                field: label.to_string(),
                max,
            });
        }
    }

    if bounds.integer && value.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger {
            field: label.to_string(),
        });
    }

    Ok(())
}

/// Validates a full parameter snapshot, reporting the first failing
/// field in form order.
pub fn validate_parameters(params: &QuoteParameters) -> ValidationResult<()> {
    ParameterField::ALL
        .iter()
        .try_for_each(|&field| validate_field(field, field.value(params)))
}

/// Validates a snapshot and returns every failing field.
///
/// Used by front ends that highlight all invalid inputs at once.
pub fn collect_violations(params: &QuoteParameters) -> Vec<ValidationError> {
    ParameterField::ALL
        .iter()
        .filter_map(|&field| validate_field(field, field.value(params)).err())
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
