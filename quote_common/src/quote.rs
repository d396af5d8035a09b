//! Quote payload received from the quotes API.
//!
//! The API answers with a JSON array of objects; each object carries the
//! quote text under the wire field `quote` together with its author and
//! category. Records are immutable once decoded.
use serde::Deserialize;

use crate::result::Result;

/// One quote record as returned by the external API.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRecord {
    /// Quote text. The wire field name is `quote`.
    #[serde(rename = "quote")]
    pub text: String,
    /// Attributed author.
    pub author: String,
    /// Category label assigned by the API.
    pub category: String,
}

/// Outcome of one fetch attempt. Produced once per call, never retried.
pub type FetchOutcome = Result<QuoteRecord>;
