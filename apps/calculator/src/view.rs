//! # Results View
//!
//! The on-screen breakdown shown after every computation.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Quote Results                              │
//! │                                             │
//! │  Total Batches                            5 │
//! │  Total Print Time                15.0 hours │
//! │                                             │
//! │  Cost Breakdown                             │
//! │    Materials                         $60.00 │
//! │    Operator Time                    $125.00 │
//! │    Machine Depreciation              $75.00 │
//! │    Subtotal                         $260.00 │
//! │    Markup (20%)                      $52.00 │
//! │                                             │
//! │  TOTAL QUOTE                        $312.00 │  ◄── accent color
//! │  Price per unit                      $15.60 │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Values use the same formatting rules as the exported document; only
//! the layout and colors differ.

use std::fmt::Write;

use colored::Colorize;
use printquote_core::formatter::{format_count, format_hours};
use printquote_core::{CurrencyFormat, QuoteParameters, QuoteResult};

use crate::state::Theme;

/// Width of the label column.
const LABEL_WIDTH: usize = 26;

/// Width of the value column.
const VALUE_WIDTH: usize = 16;

/// Text styles for one theme.
///
/// `Dark` and `Light` go through `colored`, so they print plain text when
/// stdout is not a terminal or `NO_COLOR` is set. `Plain` never styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Dark,
    Light,
    Plain,
}

impl Palette {
    /// Colors tuned for the given terminal background.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette::Dark,
            Theme::Light => Palette::Light,
        }
    }

    fn heading(self, text: &str) -> String {
        match self {
            Palette::Dark => text.bright_white().bold().to_string(),
            Palette::Light => text.black().bold().to_string(),
            Palette::Plain => text.to_string(),
        }
    }

    fn label(self, text: &str) -> String {
        match self {
            Palette::Dark => text.white().to_string(),
            Palette::Light => text.bright_black().to_string(),
            Palette::Plain => text.to_string(),
        }
    }

    fn value(self, text: &str) -> String {
        match self {
            Palette::Dark => text.bright_white().to_string(),
            Palette::Light => text.black().to_string(),
            Palette::Plain => text.to_string(),
        }
    }

    fn accent(self, text: &str) -> String {
        match self {
            Palette::Dark => text.bright_cyan().bold().to_string(),
            Palette::Light => text.blue().bold().to_string(),
            Palette::Plain => text.to_string(),
        }
    }
}

/// Renders the results panel.
pub fn render(
    params: &QuoteParameters,
    result: &QuoteResult,
    currency: &CurrencyFormat,
    palette: Palette,
) -> String {
    let money = |amount: f64| currency.format_amount(amount);
    let mut out = String::with_capacity(768);

    heading(&mut out, palette, "Quote Results");
    row(&mut out, palette, "", "Total Batches", &format_count(result.total_batches));
    row(
        &mut out,
        palette,
        "",
        "Total Print Time",
        &format!("{} hours", format_hours(result.total_print_time_hours)),
    );
    out.push('\n');

    heading(&mut out, palette, "Cost Breakdown");
    row(&mut out, palette, "  ", "Materials", &money(result.material_cost_total));
    row(&mut out, palette, "  ", "Operator Time", &money(result.operator_cost_total));
    row(&mut out, palette, "  ", "Machine Depreciation", &money(result.depreciation_total));
    row(&mut out, palette, "  ", "Subtotal", &money(result.subtotal));
    row(
        &mut out,
        palette,
        "  ",
        &format!("Markup ({}%)", format_count(params.markup_percent)),
        &money(result.markup_amount),
    );
    out.push('\n');

    let total = format!(
        "{:<label$}{:>value$}",
        "TOTAL QUOTE",
        money(result.total_price),
        label = LABEL_WIDTH,
        value = VALUE_WIDTH,
    );
    let _ = writeln!(out, "{}", palette.accent(&total));
    row(&mut out, palette, "", "Price per unit", &money(result.price_per_unit));

    out
}

fn heading(out: &mut String, palette: Palette, title: &str) {
    let _ = writeln!(out, "{}", palette.heading(title));
}

// Padding is applied before styling so escape codes never count toward width
fn row(out: &mut String, palette: Palette, indent: &str, label: &str, value: &str) {
    let width = LABEL_WIDTH.saturating_sub(indent.len());
    let label = format!("{:<width$}", label, width = width);
    let value = format!("{:>width$}", value, width = VALUE_WIDTH);
    let _ = writeln!(out, "{}{}{}", indent, palette.label(&label), palette.value(&value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use printquote_core::engine::compute;

    fn default_view(palette: Palette) -> String {
        let params = QuoteParameters::default();
        render(&params, &compute(&params), &CurrencyFormat::usd(), palette)
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_plain_view_has_no_escapes() {
        let view = default_view(Palette::Plain);
        assert!(!view.contains('\x1b'));
        assert!(view.starts_with("Quote Results\n"));
    }

    #[test]
    fn test_plain_view_rows() {
        let view = default_view(Palette::Plain);
        let lines: Vec<&str> = view.lines().collect();

        let find = |label: &str| {
            lines
                .iter()
                .find(|l| l.trim_start().starts_with(label))
                .map(|l| l.split_whitespace().last().unwrap_or_default().to_string())
        };

        assert_eq!(find("Total Batches").as_deref(), Some("5"));
        assert_eq!(find("Materials").as_deref(), Some("$60.00"));
        assert_eq!(find("Markup (20%)").as_deref(), Some("$52.00"));
        assert_eq!(find("TOTAL QUOTE").as_deref(), Some("$312.00"));
        assert_eq!(find("Price per unit").as_deref(), Some("$15.60"));
        assert!(view.contains("15.0 hours"));
    }

    #[test]
    fn test_themes_differ_only_in_color() {
        // Test stdout is not a terminal
        colored::control::set_override(true);

        let dark = default_view(Palette::for_theme(Theme::Dark));
        let light = default_view(Palette::for_theme(Theme::Light));
        assert_ne!(dark, light);
        assert!(dark.contains('\x1b'));
        assert!(light.contains('\x1b'));

        assert_eq!(strip_ansi(&dark), strip_ansi(&light));
        assert_eq!(strip_ansi(&dark), default_view(Palette::Plain));
    }

    #[test]
    fn test_for_theme() {
        assert_eq!(Palette::for_theme(Theme::Dark), Palette::Dark);
        assert_eq!(Palette::for_theme(Theme::Light), Palette::Light);
    }
}
