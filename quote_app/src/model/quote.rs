//! Quote prepared for display.
//!
//! Wire records carry no date; the display date is generated locally at the
//! moment the record is consumed, never sourced from the API.
use chrono::{DateTime, Local};
use quote_common::QuoteRecord;

/// Format behind dates like `01 Dec 2023-09.15am`.
const DISPLAY_DATE_FORMAT: &str = "%d %b %Y-%I.%M%P";

/// One quote as shown to the user.
#[derive(Debug, Clone)]
pub struct DisplayQuote {
    /// Quote text.
    pub text: String,
    /// Attributed author.
    pub author: String,
    /// Locally generated display date.
    pub date: String,
    /// Whether the user marked this quote. Local state only; nothing is
    /// written back anywhere.
    pub is_saved: bool,
}

impl DisplayQuote {
    /// Converts a wire record, stamping it with a local display date.
    pub fn from_record(record: QuoteRecord, now: DateTime<Local>) -> Self {
        Self {
            text: record.text,
            author: record.author,
            date: now.format(DISPLAY_DATE_FORMAT).to_string(),
            is_saved: false,
        }
    }

    /// Builds a quote with a preformatted date, used for seeded samples.
    pub fn with_date(
        text: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            date: date.into(),
            is_saved: false,
        }
    }
}
