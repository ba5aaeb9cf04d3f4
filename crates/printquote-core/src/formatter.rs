//! # Quote Formatter
//!
//! Turns a computed quote into the plain-text document a customer receives.
//!
//! ## Document Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  3D PRINTING QUOTE                                                      │
//! │                                                                         │
//! │  Total Units: 20                       ◄── counts: natural form         │
//! │  Total Batches: 5                                                       │
//! │  Total Print Time: 15.0 hours          ◄── hours: one decimal           │
//! │                                                                         │
//! │  COSTS BREAKDOWN:                                                       │
//! │  Materials: $60.00                     ◄── money: symbol, 2 decimals    │
//! │  Operator Time: $125.00                                                 │
//! │  Machine Depreciation: $75.00                                           │
//! │                                                                         │
//! │  Subtotal: $260.00                                                      │
//! │  Markup (20%): $52.00                                                   │
//! │                                                                         │
//! │  TOTAL QUOTE: $312.00                                                   │
//! │  Price Per Unit: $15.60                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering only reads the result; rounding is applied to the text, never
//! written back into the `QuoteResult`.

use std::fmt::Write;

use crate::money::CurrencyFormat;
use crate::types::{QuoteParameters, QuoteResult};

/// First line of every quote document.
pub const QUOTE_TITLE: &str = "3D PRINTING QUOTE";

/// Renders the quote document in US dollars.
///
/// ## Example
/// ```rust
/// use printquote_core::{engine, formatter, QuoteParameters};
///
/// let params = QuoteParameters::default();
/// let text = formatter::render(&params, &engine::compute(&params));
///
/// assert!(text.starts_with("3D PRINTING QUOTE\n"));
/// assert!(text.contains("Markup (20%): $52.00\n"));
/// assert!(text.contains("TOTAL QUOTE: $312.00\n"));
/// ```
pub fn render(params: &QuoteParameters, result: &QuoteResult) -> String {
    render_with(params, result, &CurrencyFormat::usd())
}

/// Renders the quote document with a specific currency format.
///
/// Deterministic: the same inputs always produce the same bytes.
pub fn render_with(
    params: &QuoteParameters,
    result: &QuoteResult,
    currency: &CurrencyFormat,
) -> String {
    let money = |amount: f64| currency.format_amount(amount);
    let mut out = String::with_capacity(384);

    // Writing into a String cannot fail
    let _ = write!(
        out,
        "{title}\n\
         \n\
         Total Units: {units}\n\
         Total Batches: {batches}\n\
         Total Print Time: {hours} hours\n\
         \n\
         COSTS BREAKDOWN:\n\
         Materials: {material}\n\
         Operator Time: {operator}\n\
         Machine Depreciation: {depreciation}\n\
         \n\
         Subtotal: {subtotal}\n\
         Markup ({markup_pct}%): {markup}\n\
         \n\
         TOTAL QUOTE: {total}\n\
         Price Per Unit: {per_unit}\n",
        title = QUOTE_TITLE,
        units = format_count(params.total_units),
        batches = format_count(result.total_batches),
        hours = format_hours(result.total_print_time_hours),
        material = money(result.material_cost_total),
        operator = money(result.operator_cost_total),
        depreciation = money(result.depreciation_total),
        subtotal = money(result.subtotal),
        markup_pct = format_count(params.markup_percent),
        markup = money(result.markup_amount),
        total = money(result.total_price),
        per_unit = money(result.price_per_unit),
    );

    out
}

/// Formats a count (units, batches, percent) in its natural form.
///
/// Whole numbers print without decimals, fractions in their shortest
/// exact form. Non-finite values print as `NaN`, `Infinity`, `-Infinity`.
///
/// ## Example
/// ```rust
/// use printquote_core::formatter::format_count;
///
/// assert_eq!(format_count(5.0), "5");
/// assert_eq!(format_count(12.5), "12.5");
/// assert_eq!(format_count(f64::INFINITY), "Infinity");
/// ```
pub fn format_count(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let name = if value > 0.0 { "Infinity" } else { "-Infinity" };
        name.to_string()
    } else if value == 0.0 {
        // Covers -0.0, which would otherwise print as "-0"
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Formats hours with one decimal place.
///
/// Rounds the exact binary value, so `0.35` (stored just below 0.35)
/// prints as `0.3`. Exact halves such as `0.25` round away from zero.
///
/// ## Example
/// ```rust
/// use printquote_core::formatter::format_hours;
///
/// assert_eq!(format_hours(15.0), "15.0");
/// assert_eq!(format_hours(7.3500001), "7.4");
/// assert_eq!(format_hours(0.35), "0.3");
/// ```
pub fn format_hours(hours: f64) -> String {
    if !hours.is_finite() {
        return format_count(hours);
    }

    // Only values with a .25 or .75 fraction sit exactly between two tenths
    let quarters = hours * 4.0;
    let exact_half = quarters.fract() == 0.0 && quarters % 2.0 != 0.0;

    let text = if exact_half {
        format!("{:.1}", (hours * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", hours)
    };

    if text == "-0.0" {
        "0.0".to_string()
    } else {
        text
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
