//! # Quote Commands
//!
//! Computing a quote and saving it to disk.
//!
//! ## Quote Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Quote Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐        │
//! │  │  Input   │────►│ Validate │────►│ Compute  │────►│ Display  │        │
//! │  │ snapshot │     │ (strict) │     │ (engine) │     │ / Export │        │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘        │
//! │       ▲                                                  │              │
//! │       └──────────── any input changes ◄──────────────────┘              │
//! │                     (recompute from scratch)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use printquote_core::validation::validate_parameters;
use printquote_core::{engine, QuoteDocument, QuoteParameters, QuoteResult};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::ConfigState;

/// Everything derived from one input snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub parameters: QuoteParameters,
    pub result: QuoteResult,
    pub document: QuoteDocument,
}

/// Result of writing a quote file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Computes a quote for one parameter snapshot.
///
/// ## Validation
/// With `validation.strict` (the default) out-of-range inputs are
/// rejected before the engine runs. Without it the engine is called on
/// anything, and degenerate inputs come back as ∞ / NaN.
pub fn compute_quote(
    config: &ConfigState,
    params: QuoteParameters,
) -> Result<QuoteResponse, ApiError> {
    debug!(?params, "compute_quote command");

    if config.validation.strict {
        validate_parameters(&params)?;
    }

    let result = engine::compute(&params);
    if !result.is_finite() {
        warn!("Quote contains non-finite values; inputs are out of range");
    }

    let document = QuoteDocument::with_currency(&params, &result, &config.currency);

    Ok(QuoteResponse {
        parameters: params,
        result,
        document,
    })
}

/// Writes the quote text to disk.
///
/// ## Destination
/// - explicit file path: written as given
/// - explicit directory: `<dir>/3D_Print_Quote.txt`
/// - none: the configured export directory, else the current directory
///
/// The file content is exactly the formatter output.
pub fn export_quote(
    quote: &QuoteResponse,
    destination: Option<&Path>,
    config: &ConfigState,
) -> Result<ExportResponse, ApiError> {
    let file_name = &quote.document.file_name;

    let path = match destination {
        Some(dest) if dest.is_dir() => dest.join(file_name),
        Some(dest) => dest.to_path_buf(),
        None => config
            .export
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(file_name),
    };

    let bytes = quote.document.as_bytes();
    std::fs::write(&path, bytes).map_err(|e| {
        ApiError::export(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!(path = %path.display(), bytes = bytes.len(), "Quote exported");

    Ok(ExportResponse {
        path,
        bytes: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use printquote_core::formatter;

    #[test]
    fn test_compute_default_quote() {
        let response = compute_quote(&ConfigState::default(), QuoteParameters::default()).unwrap();
        assert_eq!(response.result.total_batches, 5.0);
        assert!((response.result.total_price - 312.0).abs() < 1e-9);
        assert!(response.document.content.contains("TOTAL QUOTE: $312.00"));
    }

    #[test]
    fn test_strict_mode_rejects_zero_batch() {
        let params = QuoteParameters {
            units_per_batch: 0.0,
            ..QuoteParameters::default()
        };
        let err = compute_quote(&ConfigState::default(), params).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("Units Per Batch"));
    }

    #[test]
    fn test_permissive_mode_degrades() {
        let mut config = ConfigState::default();
        config.validation.strict = false;

        let params = QuoteParameters {
            units_per_batch: 0.0,
            ..QuoteParameters::default()
        };
        let response = compute_quote(&config, params).unwrap();
        assert!(response.result.total_batches.is_infinite());
        assert!(response.document.content.contains("Total Batches: Infinity"));
    }

    #[test]
    fn test_configured_currency_used() {
        let mut config = ConfigState::default();
        config.currency.symbol = "€".to_string();

        let response = compute_quote(&config, QuoteParameters::default()).unwrap();
        assert!(response.document.content.contains("TOTAL QUOTE: €312.00"));
    }

    #[test]
    fn test_export_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigState::default();
        let quote = compute_quote(&config, QuoteParameters::default()).unwrap();

        let exported = export_quote(&quote, Some(dir.path()), &config).unwrap();
        assert_eq!(exported.path, dir.path().join("3D_Print_Quote.txt"));

        let written = std::fs::read_to_string(&exported.path).unwrap();
        assert_eq!(
            written,
            formatter::render(&quote.parameters, &quote.result)
        );
        assert_eq!(exported.bytes, written.len());
    }

    #[test]
    fn test_export_to_explicit_file_and_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ConfigState::default();
        let quote = compute_quote(&config, QuoteParameters::default()).unwrap();

        let file = dir.path().join("customer-42.txt");
        let exported = export_quote(&quote, Some(&file), &config).unwrap();
        assert_eq!(exported.path, file);
        assert!(file.exists());

        config.export.directory = Some(dir.path().to_path_buf());
        let exported = export_quote(&quote, None, &config).unwrap();
        assert_eq!(exported.path, dir.path().join("3D_Print_Quote.txt"));
    }

    #[test]
    fn test_export_failure_is_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigState::default();
        let quote = compute_quote(&config, QuoteParameters::default()).unwrap();

        let missing = dir.path().join("no-such-dir").join("quote.txt");
        let err = export_quote(&quote, Some(&missing), &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::ExportError);
    }
}
