//! # Domain Types
//!
//! The two value objects that cross every boundary in PrintQuote.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────────────┐    ┌──────────────────────────────┐   │
//! │  │      QuoteParameters         │    │        QuoteResult           │   │
//! │  │  ──────────────────────────  │    │  ──────────────────────────  │   │
//! │  │  material_cost_per_kg        │    │  total_batches               │   │
//! │  │  material_use_per_unit_kg    │    │  total_print_time_hours      │   │
//! │  │  units_per_batch             │    │  material_cost_total         │   │
//! │  │  time_per_batch_hours        │───►│  operator_cost_total         │   │
//! │  │  operator_time_per_batch_h.  │    │  depreciation_total          │   │
//! │  │  operator_rate_per_hour      │    │  subtotal                    │   │
//! │  │  machine_depreciation_per_h. │    │  markup_amount               │   │
//! │  │  total_units                 │    │  total_price                 │   │
//! │  │  markup_percent              │    │  price_per_unit              │   │
//! │  └──────────────────────────────┘    └──────────────────────────────┘   │
//! │          input snapshot                   derived, never persisted      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why `f64` for unit counts?
//! `units_per_batch` and `total_units` are whole numbers at the input
//! boundary, but the engine must degrade to infinity/NaN rather than panic
//! when handed zero. Integer division by zero would abort the process.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Quote Parameters
// =============================================================================

/// One complete snapshot of the nine form inputs.
///
/// All nine values are read together before a computation starts, so a
/// quote never mixes old and new inputs.
///
/// Missing fields deserialize to the form defaults, so a config file may
/// override only some of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct QuoteParameters {
    /// Filament/resin price per kilogram.
    pub material_cost_per_kg: f64,

    /// Material consumed by one unit, in kilograms.
    pub material_use_per_unit_kg: f64,

    /// Units produced by a single print run.
    pub units_per_batch: f64,

    /// Machine time of one print run, in hours.
    pub time_per_batch_hours: f64,

    /// Operator hands-on time per print run (setup, removal, cleanup).
    pub operator_time_per_batch_hours: f64,

    /// Operator hourly rate.
    pub operator_rate_per_hour: f64,

    /// Machine wear charged per hour of print time.
    pub machine_depreciation_per_hour: f64,

    /// Units the customer ordered.
    pub total_units: f64,

    /// Markup on top of the subtotal, in percent.
    pub markup_percent: f64,
}

impl Default for QuoteParameters {
    /// The calculator's initial form values.
    ///
    /// ## Default Values
    /// - Material: $30.00/kg, 0.1 kg per unit
    /// - Batch: 4 units, 3 hours
    /// - Operator: 0.5 hours per batch at $50/hour
    /// - Depreciation: $5/hour
    /// - Order: 20 units, 20% markup
    fn default() -> Self {
        QuoteParameters {
            material_cost_per_kg: 30.0,
            material_use_per_unit_kg: 0.1,
            units_per_batch: 4.0,
            time_per_batch_hours: 3.0,
            operator_time_per_batch_hours: 0.5,
            operator_rate_per_hour: 50.0,
            machine_depreciation_per_hour: 5.0,
            total_units: 20.0,
            markup_percent: 20.0,
        }
    }
}

impl QuoteParameters {
    /// Runs the quote engine on this snapshot.
    ///
    /// Shorthand for [`crate::engine::compute`].
    #[inline]
    pub fn compute(&self) -> QuoteResult {
        crate::engine::compute(self)
    }
}

// =============================================================================
// Quote Result
// =============================================================================

/// Everything derived from one `QuoteParameters` snapshot.
///
/// A plain value: it has no lifecycle of its own, is recomputed whenever
/// an input changes, and is never persisted. Amounts keep full `f64`
/// precision; rounding happens only at display time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuoteResult {
    /// Print runs needed, rounded up. A partial last batch counts in full.
    pub total_batches: f64,

    /// Machine hours across all batches.
    pub total_print_time_hours: f64,

    pub material_cost_total: f64,
    pub operator_cost_total: f64,
    pub depreciation_total: f64,

    /// Sum of the three cost components.
    pub subtotal: f64,

    pub markup_amount: f64,

    /// Subtotal plus markup.
    pub total_price: f64,

    pub price_per_unit: f64,
}

impl QuoteResult {
    /// Returns true when every field is a finite number.
    ///
    /// False means the inputs were outside the valid range (for example
    /// zero units per batch) and the quote should not be offered.
    pub fn is_finite(&self) -> bool {
        [
            self.total_batches,
            self.total_print_time_hours,
            self.material_cost_total,
            self.operator_cost_total,
            self.depreciation_total,
            self.subtotal,
            self.markup_amount,
            self.total_price,
            self.price_per_unit,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_match_form() {
        let params = QuoteParameters::default();
        assert_eq!(params.material_cost_per_kg, 30.0);
        assert_eq!(params.units_per_batch, 4.0);
        assert_eq!(params.total_units, 20.0);
        assert_eq!(params.markup_percent, 20.0);
    }

    #[test]
    fn test_parameters_serialize_camel_case() {
        let json = serde_json::to_value(QuoteParameters::default()).unwrap();
        assert_eq!(json["materialCostPerKg"], 30.0);
        assert_eq!(json["operatorTimePerBatchHours"], 0.5);
        assert_eq!(json["markupPercent"], 20.0);
    }

    #[test]
    fn test_parameters_deserialize_from_form_payload() {
        let payload = r#"{
            "materialCostPerKg": 25.5,
            "materialUsePerUnitKg": 0.2,
            "unitsPerBatch": 6,
            "timePerBatchHours": 4.5,
            "operatorTimePerBatchHours": 1,
            "operatorRatePerHour": 40,
            "machineDepreciationPerHour": 2.5,
            "totalUnits": 30,
            "markupPercent": 15
        }"#;
        let params: QuoteParameters = serde_json::from_str(payload).unwrap();
        assert_eq!(params.units_per_batch, 6.0);
        assert_eq!(params.time_per_batch_hours, 4.5);
    }

    #[test]
    fn test_partial_payload_uses_defaults() {
        let params: QuoteParameters =
            serde_json::from_str(r#"{ "totalUnits": 7, "markupPercent": 0 }"#).unwrap();
        assert_eq!(params.total_units, 7.0);
        assert_eq!(params.markup_percent, 0.0);
        assert_eq!(params.units_per_batch, 4.0);
    }

    #[test]
    fn test_result_is_finite() {
        assert!(QuoteResult::default().is_finite());

        let degenerate = QuoteResult {
            total_batches: f64::INFINITY,
            ..QuoteResult::default()
        };
        assert!(!degenerate.is_finite());
    }
}
