//! # PrintQuote Calculator Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PrintQuote Calculator                            │
//! │                                                                         │
//! │  main.rs ────► hands off to printquote_calculator::run()                │
//! │                                                                         │
//! │  cli.rs ─────► nine input flags, output and theme switches              │
//! │                                                                         │
//! │  commands/ ──► compute_quote, export_quote, toggle_theme, get_config    │
//! │                                                                         │
//! │  state/ ─────► ConfigState, PreferencesState                            │
//! │                                                                         │
//! │  printquote-core ─► engine, formatter, validation (pure, no I/O)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for testability
    printquote_calculator::run()
}
