//! # Commands Module
//!
//! All operations the front end can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── quote.rs    ◄─── Compute, export
//! ├── theme.rs    ◄─── Theme preference get/set/toggle
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  CLI flags ──► QuoteParameters snapshot                                 │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │  compute_quote(                                                         │
//! │      config: &ConfigState,      ◄── Only the state it needs            │
//! │      params: QuoteParameters,   ◄── One complete snapshot              │
//! │  ) -> Result<QuoteResponse, ApiError>                                   │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │  view::render / JSON / export_quote                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command declares only the state it reads, so commands can be
//! called directly from tests without building the whole app.

pub mod config;
pub mod quote;
pub mod theme;
