//! # printquote-core: Pure Pricing Logic for PrintQuote
//!
//! This crate is the **heart** of PrintQuote. It turns nine job parameters
//! into a 3D-printing price quote and a plain-text quote document, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PrintQuote Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Input Collector (CLI / form)                    │   │
//! │  │     nine numeric fields ──► QuoteParameters snapshot            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ printquote-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │validation │  │  engine   │  │ formatter │  │  export   │  │   │
//! │  │   │  bounds   │─►│  compute  │─►│  render   │─►│ document  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            Output Sink (terminal view / .txt file)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `QuoteParameters` and `QuoteResult`
//! - [`engine`] - The pricing formula
//! - [`formatter`] - Plain-text quote rendering
//! - [`money`] - Cent-rounded money and the currency display format
//! - [`export`] - The downloadable quote artifact
//! - [`validation`] - Input boundary checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use printquote_core::{engine, formatter, QuoteParameters};
//!
//! let params = QuoteParameters::default();
//! let result = engine::compute(&params);
//!
//! assert_eq!(result.total_batches, 5.0);
//! assert_eq!(result.total_price, 312.0);
//!
//! let text = formatter::render(&params, &result);
//! assert!(text.contains("TOTAL QUOTE: $312.00"));
//! ```

pub mod engine;
pub mod error;
pub mod export;
pub mod formatter;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use export::QuoteDocument;
pub use money::{CurrencyFormat, Money};
pub use types::{QuoteParameters, QuoteResult};

/// Upper bound for the markup field at the input boundary.
///
/// The engine itself accepts any markup; only the validator uses this.
pub const MAX_MARKUP_PERCENT: f64 = 100.0;
