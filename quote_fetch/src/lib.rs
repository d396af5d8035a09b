//! Quote fetch core: a single-endpoint HTTP client plus a two-way join
//! coordinator.
//!
//! This crate wires together three building blocks:
//!
//! - `config` — `FetchConfig` with the API base URL and the static API key.
//! - `client` — `QuoteFetchClient`, one GET per call against `/v1/quotes`;
//!   the first record of the JSON array response wins, everything else is
//!   discarded. The `QuoteSource` trait is the seam consumers and tests plug
//!   substitute sources into.
//! - `coordinator` — `DualFetchCoordinator`, which issues two independent
//!   concurrent fetches and delivers both outcomes only after BOTH finished,
//!   never collapsing a partial failure into a total one.
//!
//! There are no retries, no caching, and no built-in timeouts anywhere in
//! this crate; callers that need a time bound impose their own cancellation.
#![warn(missing_docs)]
pub mod client;
pub mod config;
pub mod coordinator;

pub use client::{QuoteFetchClient, QuoteSource};
pub use config::FetchConfig;
pub use coordinator::DualFetchCoordinator;
