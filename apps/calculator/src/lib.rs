//! # PrintQuote Calculator Library
//!
//! Front end for the PrintQuote engine: collects inputs, shows the
//! results panel, exports the quote file and keeps the theme preference.
//!
//! ## Module Organization
//! ```text
//! printquote_calculator/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Input collector (clap flags)
//! ├── view.rs         ◄─── Themed results panel
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── config.rs       ◄─── Calculator configuration
//! │   └── preferences.rs  ◄─── Theme preference persistence
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── quote.rs    ◄─── Compute and export
//! │   ├── theme.rs    ◄─── Theme get/set/toggle
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;
pub mod view;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use directories::ProjectDirs;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::CliArgs;
use commands::quote::{ExportResponse, QuoteResponse};
use commands::theme::ThemeResponse;
use error::ApiError;
use state::{detect_host_theme, ConfigState, PreferencesState, PreferencesStore, Theme};
use view::Palette;

/// Host environment facts gathered once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostContext {
    /// Theme used when no preference was stored yet.
    pub theme: Theme,
}

impl HostContext {
    /// Reads `COLORFGBG` from the process environment.
    pub fn from_env() -> Self {
        HostContext {
            theme: detect_host_theme(|key| std::env::var(key).ok()),
        }
    }
}

/// JSON payload printed under `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunResponse<'a> {
    #[serde(flatten)]
    quote: &'a QuoteResponse,
    theme: ThemeResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    export: Option<ExportResponse>,
}

/// Runs the calculator.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Parse CLI flags ──────────────────────────────────────────────────► │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: warn, printquote=info; override with RUST_LOG            │
/// │                                                                         │
/// │  3. Load Configuration ───────────────────────────────────────────────► │
/// │     • calculator.toml, then PRINTQUOTE_* overrides                      │
/// │                                                                         │
/// │  4. Resolve Theme ────────────────────────────────────────────────────► │
/// │     • preferences.toml, else host signal                                │
/// │                                                                         │
/// │  5. Compute, display, export ─────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Exit status is 1 for invalid inputs and 2 for every other failure.
pub fn run() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing();

    // colored already honours NO_COLOR and a non-terminal stdout
    if args.no_color {
        colored::control::set_override(false);
    }

    info!("Starting PrintQuote calculator");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run_with(&args, HostContext::from_env(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, args.json, &mut out);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Runs one invocation against explicit host facts and output.
pub fn run_with<W: Write>(args: &CliArgs, host: HostContext, out: &mut W) -> Result<(), ApiError> {
    let mut config = ConfigState::load(args.config.clone())?;
    if args.no_validate {
        debug!("Input validation disabled");
        config.validation.strict = false;
    }

    if args.show_config {
        let config = commands::config::get_config(&config);
        if args.json {
            serde_json::to_writer_pretty(&mut *out, &config)?;
            writeln!(out)?;
        } else {
            write!(out, "{}", toml::to_string_pretty(&config)?)?;
        }
        return Ok(());
    }

    let store = PreferencesStore::resolve(args.prefs.clone())?;
    let prefs = PreferencesState::initialize(store, host.theme);

    let theme = if let Some(theme) = args.theme {
        commands::theme::set_theme(&prefs, theme)?
    } else if args.toggle_theme {
        commands::theme::toggle_theme(&prefs)?
    } else {
        commands::theme::get_theme(&prefs)
    };

    if args.theme_only() {
        writeln!(out, "Theme: {}", theme.theme)?;
        return Ok(());
    }

    let params = args.parameters(&config.defaults);
    let quote = commands::quote::compute_quote(&config, params)?;

    let export = match &args.export {
        Some(destination) => Some(commands::quote::export_quote(
            &quote,
            destination.as_deref(),
            &config,
        )?),
        None => None,
    };

    if args.json {
        let response = RunResponse {
            quote: &quote,
            theme,
            export,
        };
        serde_json::to_writer_pretty(&mut *out, &response)?;
        writeln!(out)?;
        return Ok(());
    }

    if args.print_quote {
        write!(out, "{}", quote.document.content)?;
    } else {
        let palette = if args.no_color {
            Palette::Plain
        } else {
            Palette::for_theme(theme.theme)
        };
        write!(
            out,
            "{}",
            view::render(&quote.parameters, &quote.result, &config.currency, palette)
        )?;
    }

    if let Some(export) = export {
        writeln!(out, "\nQuote saved to {}", export.path.display())?;
    }

    Ok(())
}

/// Prints a failed invocation: JSON on stdout under `--json`, else stderr.
fn report_error<W: Write>(err: &ApiError, json: bool, out: &mut W) {
    if json {
        if let Ok(body) = serde_json::to_string_pretty(err) {
            let _ = writeln!(out, "{}", body);
            return;
        }
    }
    eprintln!("error: {}", err.message);
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=printquote=trace` - Show trace for printquote crates only
/// - Default: WARN, INFO for printquote
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,printquote=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Platform directories for config and preference files.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.printquote.calculator/`
/// - **Windows**: `%APPDATA%\printquote\calculator\config\`
/// - **Linux**: `~/.config/calculator/`
pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "printquote", "calculator")
}
