//! # Quote Export
//!
//! Describes the downloadable quote file. Writing it to disk (or handing
//! it to a browser) belongs to the front end; this crate only decides
//! what the artifact contains.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::formatter;
use crate::money::CurrencyFormat;
use crate::types::{QuoteParameters, QuoteResult};

/// Suggested file name for an exported quote.
pub const QUOTE_FILE_NAME: &str = "3D_Print_Quote.txt";

/// MIME type of an exported quote.
pub const QUOTE_MIME_TYPE: &str = "text/plain";

/// A quote ready to be saved or downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuoteDocument {
    pub file_name: String,
    pub mime_type: String,
    /// Exactly the formatter output.
    pub content: String,
}

impl QuoteDocument {
    /// Builds the document in the default currency format.
    ///
    /// ## Example
    /// ```rust
    /// use printquote_core::{engine, QuoteDocument, QuoteParameters};
    ///
    /// let params = QuoteParameters::default();
    /// let doc = QuoteDocument::new(&params, &engine::compute(&params));
    ///
    /// assert_eq!(doc.file_name, "3D_Print_Quote.txt");
    /// assert_eq!(doc.mime_type, "text/plain");
    /// assert!(doc.content.contains("TOTAL QUOTE: $312.00"));
    /// ```
    pub fn new(params: &QuoteParameters, result: &QuoteResult) -> Self {
        Self::with_currency(params, result, &CurrencyFormat::usd())
    }

    pub fn with_currency(
        params: &QuoteParameters,
        result: &QuoteResult,
        currency: &CurrencyFormat,
    ) -> Self {
        QuoteDocument {
            file_name: QUOTE_FILE_NAME.to_string(),
            mime_type: QUOTE_MIME_TYPE.to_string(),
            content: formatter::render_with(params, result, currency),
        }
    }

    /// Content as bytes, ready to write.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;

    #[test]
    fn test_content_is_formatter_output() {
        let params = QuoteParameters {
            markup_percent: 40.0,
            ..QuoteParameters::default()
        };
        let result = compute(&params);
        let doc = QuoteDocument::new(&params, &result);

        assert_eq!(doc.content, formatter::render(&params, &result));
        assert_eq!(doc.as_bytes(), doc.content.as_bytes());
    }

    #[test]
    fn test_currency_flows_into_content() {
        let params = QuoteParameters::default();
        let doc = QuoteDocument::with_currency(
            &params,
            &compute(&params),
            &CurrencyFormat::with_symbol("€"),
        );
        assert!(doc.content.contains("TOTAL QUOTE: €312.00"));
        assert_eq!(doc.file_name, QUOTE_FILE_NAME);
    }
}
