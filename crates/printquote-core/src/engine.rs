//! # Quote Engine
//!
//! The pricing formula. Maps one [`QuoteParameters`] snapshot to a
//! [`QuoteResult`].
//!
//! ## Calculation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Quote Calculation                                 │
//! │                                                                         │
//! │  1. batches      = ⌈total_units / units_per_batch⌉                      │
//! │  2. material     = cost/kg × kg/unit × total_units                      │
//! │  3. print_time   = time/batch × batches                                 │
//! │  4. operator     = rate/h × operator_h/batch × batches                  │
//! │  5. depreciation = depreciation/h × print_time                          │
//! │  6. subtotal     = material + operator + depreciation                   │
//! │  7. markup       = subtotal × markup% / 100                             │
//! │  8. total        = subtotal + markup                                    │
//! │  9. per_unit     = total / total_units                                  │
//! │                                                                         │
//! │  Each step reads only the inputs and earlier steps.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Degenerate Inputs
//! Nothing here fails. Zero units per batch gives infinite batches, zero
//! total units gives a NaN per-unit price. Rejecting such inputs is the
//! job of [`crate::validation`], not of the engine.

use crate::types::{QuoteParameters, QuoteResult};

/// Computes a quote.
///
/// Total and pure: identical parameters always yield bit-identical results.
///
/// ## Example
/// ```rust
/// use printquote_core::{engine, QuoteParameters};
///
/// let params = QuoteParameters {
///     total_units: 21.0,
///     ..QuoteParameters::default()
/// };
/// let result = engine::compute(&params);
///
/// // 21 units at 4 per batch: the sixth batch prints a single unit
/// assert_eq!(result.total_batches, 6.0);
/// ```
pub fn compute(params: &QuoteParameters) -> QuoteResult {
    let total_batches = batch_count(params.total_units, params.units_per_batch);

    let material_cost_total =
        params.material_cost_per_kg * params.material_use_per_unit_kg * params.total_units;
    let total_print_time_hours = params.time_per_batch_hours * total_batches;
    let operator_cost_total =
        params.operator_rate_per_hour * params.operator_time_per_batch_hours * total_batches;
    let depreciation_total = params.machine_depreciation_per_hour * total_print_time_hours;

    let subtotal = material_cost_total + operator_cost_total + depreciation_total;
    let markup_amount = subtotal * (params.markup_percent / 100.0);
    let total_price = subtotal + markup_amount;
    let price_per_unit = total_price / params.total_units;

    QuoteResult {
        total_batches,
        total_print_time_hours,
        material_cost_total,
        operator_cost_total,
        depreciation_total,
        subtotal,
        markup_amount,
        total_price,
        price_per_unit,
    }
}

/// Number of print runs needed, rounding a partial last batch up.
///
/// ## Example
/// ```rust
/// use printquote_core::engine::batch_count;
///
/// assert_eq!(batch_count(16.0, 4.0), 4.0);
/// assert_eq!(batch_count(17.0, 4.0), 5.0);
/// ```
#[inline]
pub fn batch_count(total_units: f64, units_per_batch: f64) -> f64 {
    (total_units / units_per_batch).ceil()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON * b.abs().max(1.0)
    }

    #[test]
    fn test_default_scenario() {
        let result = compute(&QuoteParameters::default());

        assert_eq!(result.total_batches, 5.0);
        assert!(approx_eq(result.total_print_time_hours, 15.0));
        assert!(approx_eq(result.material_cost_total, 60.0));
        assert!(approx_eq(result.operator_cost_total, 125.0));
        assert!(approx_eq(result.depreciation_total, 75.0));
        assert!(approx_eq(result.subtotal, 260.0));
        assert!(approx_eq(result.markup_amount, 52.0));
        assert!(approx_eq(result.total_price, 312.0));
        assert!(approx_eq(result.price_per_unit, 15.6));
    }

    #[test]
    fn test_batches_round_up() {
        assert_eq!(batch_count(20.0, 4.0), 5.0);
        assert_eq!(batch_count(21.0, 4.0), 6.0);
        assert_eq!(batch_count(1.0, 4.0), 1.0);
        assert_eq!(batch_count(3.0, 1.0), 3.0);
    }

    #[test]
    fn test_exact_multiple_adds_no_batch() {
        let params = QuoteParameters {
            total_units: 16.0,
            ..QuoteParameters::default()
        };
        let result = compute(&params);
        assert_eq!(result.total_batches, 4.0);
        assert!(approx_eq(result.total_print_time_hours, 12.0));
    }

    #[test]
    fn test_partial_batch_costed_in_full() {
        let params = QuoteParameters {
            total_units: 21.0,
            ..QuoteParameters::default()
        };
        let result = compute(&params);

        // Six batches of machine and operator time, but material for 21 units only
        assert!(approx_eq(result.total_print_time_hours, 18.0));
        assert!(approx_eq(result.operator_cost_total, 150.0));
        assert!(approx_eq(result.depreciation_total, 90.0));
        assert!(approx_eq(result.material_cost_total, 63.0));
        assert!(result.total_batches * params.units_per_batch >= params.total_units);
    }

    #[test]
    fn test_total_never_below_subtotal() {
        for markup in [0.0, 1.0, 20.0, 100.0, 250.0] {
            let params = QuoteParameters {
                markup_percent: markup,
                ..QuoteParameters::default()
            };
            let result = compute(&params);
            assert!(result.total_price >= result.subtotal, "markup {}", markup);
        }
    }

    #[test]
    fn test_zero_markup_total_equals_subtotal() {
        let params = QuoteParameters {
            markup_percent: 0.0,
            ..QuoteParameters::default()
        };
        let result = compute(&params);
        assert_eq!(result.markup_amount, 0.0);
        assert_eq!(result.total_price, result.subtotal);
    }

    #[test]
    fn test_per_unit_times_units_is_total() {
        let params = QuoteParameters {
            material_cost_per_kg: 27.99,
            material_use_per_unit_kg: 0.037,
            units_per_batch: 7.0,
            time_per_batch_hours: 5.3,
            operator_time_per_batch_hours: 0.4,
            operator_rate_per_hour: 45.0,
            machine_depreciation_per_hour: 1.7,
            total_units: 33.0,
            markup_percent: 35.0,
        };
        let result = compute(&params);
        assert!(approx_eq(
            result.price_per_unit * params.total_units,
            result.total_price
        ));
        assert!(approx_eq(
            result.total_price,
            result.subtotal * (1.0 + params.markup_percent / 100.0)
        ));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let params = QuoteParameters {
            material_use_per_unit_kg: 0.013,
            time_per_batch_hours: 2.7,
            ..QuoteParameters::default()
        };
        let first = compute(&params);
        let second = compute(&params);

        assert_eq!(first.total_price.to_bits(), second.total_price.to_bits());
        assert_eq!(first.price_per_unit.to_bits(), second.price_per_unit.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_method_matches_free_function() {
        let params = QuoteParameters::default();
        assert_eq!(params.compute(), compute(&params));
    }

    #[test]
    fn test_zero_units_per_batch_degrades_without_panic() {
        let params = QuoteParameters {
            units_per_batch: 0.0,
            ..QuoteParameters::default()
        };
        let result = compute(&params);

        assert!(result.total_batches.is_infinite());
        assert!(result.total_print_time_hours.is_infinite());
        assert!(result.total_price.is_infinite());
        assert!(!result.is_finite());
    }

    #[test]
    fn test_zero_total_units_gives_nan_per_unit() {
        let params = QuoteParameters {
            total_units: 0.0,
            ..QuoteParameters::default()
        };
        let result = compute(&params);

        assert_eq!(result.total_batches, 0.0);
        assert_eq!(result.total_price, 0.0);
        assert!(result.price_per_unit.is_nan());
    }

    #[test]
    fn test_markup_above_hundred_is_not_clamped() {
        let params = QuoteParameters {
            markup_percent: 150.0,
            ..QuoteParameters::default()
        };
        let result = compute(&params);
        assert!(approx_eq(result.markup_amount, 390.0));
        assert!(approx_eq(result.total_price, 650.0));
    }
}
