//! # Money Module
//!
//! Provides the `Money` type and the fixed currency display format.
//!
//! ## Where Floats Stop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FULL PRECISION IN, CENTS OUT                                           │
//! │                                                                         │
//! │  engine::compute ──► QuoteResult (f64, full precision)                  │
//! │                           │                                             │
//! │                           ▼                                             │
//! │                  Money::from_amount(f64)  ← the ONLY f64 → cents step   │
//! │                           │                                             │
//! │                           ▼                                             │
//! │                  CurrencyFormat::format_money  →  "$1,234.56"           │
//! │                                                                         │
//! │  The QuoteResult itself is never rounded, so further computation on    │
//! │  it keeps full precision.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use printquote_core::money::{CurrencyFormat, Money};
//!
//! let price = Money::from_amount(15.6).unwrap();
//! assert_eq!(price.cents(), 1560);
//!
//! let usd = CurrencyFormat::usd();
//! assert_eq!(usd.format_money(price), "$15.60");
//! assert_eq!(usd.format_amount(1234567.891), "$1,234,567.89");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: degenerate inputs can produce negative amounts
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Display-side only**: the engine works in `f64`; money is what the
///   user finally reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a full-precision amount to the nearest cent.
    ///
    /// Halves round away from zero. Returns `None` for NaN, infinities and
    /// amounts too large to hold in cents.
    ///
    /// ## Example
    /// ```rust
    /// use printquote_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(52.000000000000014).unwrap().cents(), 5200);
    /// assert_eq!(Money::from_amount(0.125).unwrap().cents(), 13);
    /// assert!(Money::from_amount(f64::INFINITY).is_none());
    /// ```
    pub fn from_amount(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, so the bound is exclusive
        if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Currency Format
// =============================================================================

/// How money is written: a currency symbol, two decimals, and optional
/// thousands grouping.
///
/// There is exactly one format in use at a time. The symbol can be
/// configured, the two-decimal layout cannot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CurrencyFormat {
    /// Prefix written before the amount, e.g. `$`.
    pub symbol: String,

    /// Whether to separate thousands with commas.
    pub grouping: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::usd()
    }
}

impl CurrencyFormat {
    /// US dollars with thousands grouping: `$1,234.56`.
    pub fn usd() -> Self {
        CurrencyFormat {
            symbol: "$".to_string(),
            grouping: true,
        }
    }

    /// Creates a format with a custom symbol.
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        CurrencyFormat {
            symbol: symbol.into(),
            ..CurrencyFormat::usd()
        }
    }

    /// Formats a cent amount.
    ///
    /// ## Example
    /// ```rust
    /// use printquote_core::money::{CurrencyFormat, Money};
    ///
    /// let usd = CurrencyFormat::usd();
    /// assert_eq!(usd.format_money(Money::from_cents(123456)), "$1,234.56");
    /// assert_eq!(usd.format_money(Money::from_cents(-550)), "-$5.50");
    /// ```
    pub fn format_money(&self, money: Money) -> String {
        let whole = money.dollars().unsigned_abs().to_string();
        let cents = format!("{:02}", money.cents_part());
        self.assemble(money.is_negative(), whole, &cents)
    }

    /// Formats a full-precision amount, rounding to the cent.
    ///
    /// Non-finite amounts are written out instead of failing:
    /// `$NaN`, `$∞`, `-$∞`. Finite amounts beyond the cent range are
    /// formatted straight from the `f64`.
    ///
    /// ## Example
    /// ```rust
    /// use printquote_core::money::CurrencyFormat;
    ///
    /// let usd = CurrencyFormat::usd();
    /// assert_eq!(usd.format_amount(f64::INFINITY), "$∞");
    /// assert_eq!(usd.format_amount(1e20), "$100,000,000,000,000,000,000.00");
    /// ```
    pub fn format_amount(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{}NaN", self.symbol);
        }
        if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            return format!("{}{}∞", sign, self.symbol);
        }

        match Money::from_amount(amount) {
            Some(money) => self.format_money(money),
            None => {
                let text = format!("{:.2}", amount.abs());
                let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
                self.assemble(amount < 0.0, whole.to_string(), cents)
            }
        }
    }

    fn assemble(&self, negative: bool, whole: String, cents: &str) -> String {
        let sign = if negative { "-" } else { "" };
        let whole = if self.grouping {
            group_thousands(&whole)
        } else {
            whole
        };

        format!("{}{}{}.{}", sign, self.symbol, whole, cents)
    }
}

/// Inserts a comma between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the default USD format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&CurrencyFormat::usd().format_money(*self))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_amount_rounds_to_cent() {
        assert_eq!(Money::from_amount(312.0).unwrap().cents(), 31200);
        assert_eq!(Money::from_amount(15.6).unwrap().cents(), 1560);
        assert_eq!(Money::from_amount(60.00000000000001).unwrap().cents(), 6000);
        assert_eq!(Money::from_amount(0.004).unwrap().cents(), 0);
        assert_eq!(Money::from_amount(-2.346).unwrap().cents(), -235);
    }

    #[test]
    fn test_from_amount_rejects_non_finite() {
        assert!(Money::from_amount(f64::NAN).is_none());
        assert!(Money::from_amount(f64::INFINITY).is_none());
        assert!(Money::from_amount(f64::NEG_INFINITY).is_none());
        assert!(Money::from_amount(1e300).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_thousands_grouping() {
        let usd = CurrencyFormat::usd();
        assert_eq!(usd.format_money(Money::from_cents(99999)), "$999.99");
        assert_eq!(usd.format_money(Money::from_cents(100000)), "$1,000.00");
        assert_eq!(usd.format_money(Money::from_cents(123456789)), "$1,234,567.89");
        assert_eq!(usd.format_money(Money::from_cents(-100000000)), "-$1,000,000.00");
    }

    #[test]
    fn test_grouping_disabled() {
        let plain = CurrencyFormat {
            grouping: false,
            ..CurrencyFormat::usd()
        };
        assert_eq!(plain.format_money(Money::from_cents(123456789)), "$1234567.89");
    }

    #[test]
    fn test_custom_symbol() {
        let euro = CurrencyFormat::with_symbol("€");
        assert_eq!(euro.format_amount(1234.5), "€1,234.50");
    }

    #[test]
    fn test_format_non_finite_amounts() {
        let usd = CurrencyFormat::usd();
        assert_eq!(usd.format_amount(f64::NAN), "$NaN");
        assert_eq!(usd.format_amount(f64::INFINITY), "$∞");
        assert_eq!(usd.format_amount(f64::NEG_INFINITY), "-$∞");
    }

    #[test]
    fn test_finite_amount_beyond_cent_range() {
        // Over i64::MAX cents, but still a real number
        let usd = CurrencyFormat::usd();
        assert_eq!(usd.format_amount(1e20), "$100,000,000,000,000,000,000.00");
        assert_eq!(usd.format_amount(-1e20), "-$100,000,000,000,000,000,000.00");

        let plain = CurrencyFormat {
            grouping: false,
            ..CurrencyFormat::usd()
        };
        assert_eq!(plain.format_amount(1e20), "$100000000000000000000.00");
    }
}
