//! Common types shared by the quote fetch core and the CLI app.
//!
//! This crate aggregates:
//! - `error` — unified error type `FetchError` used across the workspace.
//! - `result` — handy `Result<T, FetchError>` alias.
//! - `quote` — wire model for quote records and the per-fetch outcome.
//! - `net` — endpoint constants and small URL helpers.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod quote;
pub mod net;

pub use error::FetchError;
pub use result::Result;
pub use quote::{FetchOutcome, QuoteRecord};
