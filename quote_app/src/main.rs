//! Quotes CLI — fetches a pair of inspirational quotes and prints them to
//! stdout, together with the in-memory favorites list. Internally it wires
//! together:
//!
//! - `QuoteFetchClient` — one GET per call against the quotes API with a
//!   static `X-Api-Key` header.
//! - `DualFetchCoordinator` — runs two independent fetches concurrently and
//!   hands back both outcomes once both have finished.
//!
//! Rendering policy (per slot): a successful half becomes a `DisplayQuote`
//! stamped with a local date and is printed; a failed half is logged and
//! skipped without affecting the other. After the pair, the seeded favorites
//! list is printed and any `--category` selection is reported once; the
//! selection deliberately drives nothing.
//!
//! Usage example (CLI):
//! ```bash
//! QUOTES_API_KEY=<key> quote_app --category love --category work
//! ```
#![warn(missing_docs)]
mod args;
mod favorites;
mod model;

use std::sync::Arc;

use chrono::Local;
use clap::Parser;
use log::{debug, error, info, warn};
use quote_fetch::{DualFetchCoordinator, FetchConfig, QuoteFetchClient};

use crate::args::Args;
use crate::favorites::FavoritesList;
use crate::model::category::CategorySelection;
use crate::model::quote::DisplayQuote;

#[tokio::main]
async fn main() {
    init_logger();
    let args = Args::parse();

    let config = FetchConfig::with_base_url(args.base_url, args.api_key);
    info!("Fetching a quote pair from {}", config.base_url);

    let client = QuoteFetchClient::new(config);
    let coordinator = DualFetchCoordinator::new(Arc::new(client));
    let (top, bottom) = coordinator.fetch_pair().await;

    // Both outcomes arrive together; the display date is local, never from
    // the API, and a failed half never hides the successful one.
    let now = Local::now();
    match top {
        Ok(record) => render_quote("Top", &DisplayQuote::from_record(record, now)),
        Err(e) => error!("Top quote error: {}", e),
    }
    match bottom {
        Ok(record) => render_quote("Bottom", &DisplayQuote::from_record(record, now)),
        Err(e) => error!("Bottom quote error: {}", e),
    }

    let mut favorites = FavoritesList::with_samples();
    if let Some(index) = args.toggle_favorite {
        if favorites.toggle_saved(index).is_none() {
            warn!("No favorite at index {}", index);
        }
    }
    if !favorites.is_empty() {
        println!("\nFavorites ({}):", favorites.len());
        for quote in favorites.iter() {
            render_quote("Saved", quote);
        }
    }

    let mut selection = CategorySelection::default();
    for category in &args.categories {
        selection.toggle(*category);
        debug!("Category {} selected: {}", category, selection.is_selected(*category));
    }
    if !selection.is_empty() {
        info!("Selected categories: {}", selection.summary());
    }
}

/// Prints one quote in the app's card-like layout.
fn render_quote(slot: &str, quote: &DisplayQuote) {
    let marker = if quote.is_saved { " [saved]" } else { "" };
    println!("[{}]{} \"{}\"", slot, marker, quote.text);
    println!("      - {}", quote.author);
    println!("      {}", quote.date);
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
