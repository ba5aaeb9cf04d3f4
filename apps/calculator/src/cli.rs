//! # Command Line Interface
//!
//! The input collector: nine numeric flags, one per form field, plus
//! output and theme switches.
//!
//! ```text
//! printquote --total-units 21 --markup 35            # themed results panel
//! printquote --units-per-batch 6 --json              # JSON response
//! printquote --export ~/quotes/                      # write 3D_Print_Quote.txt
//! printquote --toggle-theme                          # flip and persist theme
//! ```
//!
//! Every flag left out takes its value from `[defaults]` in the config
//! file, which in turn defaults to the form's initial values.

use std::path::PathBuf;

use clap::Parser;
use printquote_core::QuoteParameters;

use crate::state::Theme;

/// PrintQuote: 3D print job quote calculator.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "printquote", version, about, long_about = None)]
pub struct CliArgs {
    /// Material Cost ($/kg)
    #[arg(long, value_name = "PER_KG", allow_negative_numbers = true)]
    pub material_cost: Option<f64>,

    /// Material Use per Unit (kg)
    #[arg(long, value_name = "KG", allow_negative_numbers = true)]
    pub material_use: Option<f64>,

    /// Units Per Batch
    #[arg(long, value_name = "UNITS", allow_negative_numbers = true)]
    pub units_per_batch: Option<f64>,

    /// Time Per Batch (hours)
    #[arg(long, value_name = "HOURS", allow_negative_numbers = true)]
    pub time_per_batch: Option<f64>,

    /// Operator Time per Batch (hours)
    #[arg(long, value_name = "HOURS", allow_negative_numbers = true)]
    pub operator_time: Option<f64>,

    /// Operator Rate ($/hour)
    #[arg(long, value_name = "PER_HOUR", allow_negative_numbers = true)]
    pub operator_rate: Option<f64>,

    /// Machine Depreciation ($/hour)
    #[arg(long, value_name = "PER_HOUR", allow_negative_numbers = true)]
    pub depreciation: Option<f64>,

    /// Total Units Required
    #[arg(long, value_name = "UNITS", allow_negative_numbers = true)]
    pub total_units: Option<f64>,

    /// Markup Percentage (%)
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub markup: Option<f64>,

    /// Write the quote file (to PATH, a directory, or the export directory)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Print the plain-text quote instead of the results panel
    #[arg(long, conflicts_with = "json")]
    pub print_quote: bool,

    /// Print the response as JSON
    #[arg(long)]
    pub json: bool,

    /// Compute even when inputs are out of range
    #[arg(long)]
    pub no_validate: bool,

    /// Set and persist the theme
    #[arg(long, value_enum, conflicts_with = "toggle_theme")]
    pub theme: Option<Theme>,

    /// Flip between dark and light and persist the choice
    #[arg(long)]
    pub toggle_theme: bool,

    /// Disable colors in the results panel (also honours NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Config file path
    #[arg(long, value_name = "FILE", env = "PRINTQUOTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Preference file path
    #[arg(long, value_name = "FILE", env = "PRINTQUOTE_PREFS_PATH")]
    pub prefs: Option<PathBuf>,
}

impl CliArgs {
    /// Builds one complete parameter snapshot.
    ///
    /// Flags given on the command line win; everything else comes from
    /// `defaults`.
    pub fn parameters(&self, defaults: &QuoteParameters) -> QuoteParameters {
        QuoteParameters {
            material_cost_per_kg: self.material_cost.unwrap_or(defaults.material_cost_per_kg),
            material_use_per_unit_kg: self
                .material_use
                .unwrap_or(defaults.material_use_per_unit_kg),
            units_per_batch: self.units_per_batch.unwrap_or(defaults.units_per_batch),
            time_per_batch_hours: self.time_per_batch.unwrap_or(defaults.time_per_batch_hours),
            operator_time_per_batch_hours: self
                .operator_time
                .unwrap_or(defaults.operator_time_per_batch_hours),
            operator_rate_per_hour: self.operator_rate.unwrap_or(defaults.operator_rate_per_hour),
            machine_depreciation_per_hour: self
                .depreciation
                .unwrap_or(defaults.machine_depreciation_per_hour),
            total_units: self.total_units.unwrap_or(defaults.total_units),
            markup_percent: self.markup.unwrap_or(defaults.markup_percent),
        }
    }

    /// True when the invocation only changes the theme.
    ///
    /// `--theme` / `--toggle-theme` on their own skip the quote output.
    pub fn theme_only(&self) -> bool {
        (self.theme.is_some() || self.toggle_theme)
            && self.export.is_none()
            && !self.print_quote
            && !self.json
            && self.quote_flags_absent()
    }

    fn quote_flags_absent(&self) -> bool {
        [
            self.material_cost,
            self.material_use,
            self.units_per_batch,
            self.time_per_batch,
            self.operator_time,
            self.operator_rate,
            self.depreciation,
            self.total_units,
            self.markup,
        ]
        .iter()
        .all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("printquote").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_missing_flags_use_defaults() {
        let args = parse(&["--total-units", "21", "--markup", "35"]);
        let params = args.parameters(&QuoteParameters::default());

        assert_eq!(params.total_units, 21.0);
        assert_eq!(params.markup_percent, 35.0);
        assert_eq!(params.units_per_batch, 4.0);
        assert_eq!(params.material_cost_per_kg, 30.0);
    }

    #[test]
    fn test_negative_values_parse() {
        // Rejected later by validation, not by the parser
        let args = parse(&["--markup", "-5"]);
        assert_eq!(args.markup, Some(-5.0));
    }

    #[test]
    fn test_export_with_and_without_path() {
        assert_eq!(parse(&["--export"]).export, Some(None));
        assert_eq!(
            parse(&["--export", "out.txt"]).export,
            Some(Some(PathBuf::from("out.txt")))
        );
        assert_eq!(parse(&[]).export, None);
    }

    #[test]
    fn test_theme_only() {
        assert!(parse(&["--toggle-theme"]).theme_only());
        assert!(parse(&["--theme", "dark"]).theme_only());
        assert!(!parse(&["--theme", "dark", "--total-units", "8"]).theme_only());
        assert!(!parse(&[]).theme_only());
    }

    #[test]
    fn test_conflicting_flags() {
        let result = CliArgs::try_parse_from(["printquote", "--theme", "light", "--toggle-theme"]);
        assert!(result.is_err());

        let result = CliArgs::try_parse_from(["printquote", "--json", "--print-quote"]);
        assert!(result.is_err());
    }
}
