//! Command-line arguments for the Quotes app.
//!
//! This module defines the CLI interface using `clap`. See `main` for
//! end-to-end usage. The API key is a secret and therefore comes from a flag
//! or the `QUOTES_API_KEY` environment variable, never from the source tree.
use clap::Parser;
use quote_common::net::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};

use crate::model::category::Category;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quotes API.
    #[clap(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Static API key sent as the X-Api-Key header.
    #[clap(long, env = API_KEY_ENV)]
    pub api_key: String,

    /// Categories to mark as selected. May be given multiple times.
    /// Selection is reported once and deliberately drives nothing.
    #[clap(long = "category", value_enum)]
    pub categories: Vec<Category>,

    /// Flip the saved mark of the n-th seeded favorite for this run.
    /// Local state only; nothing is written back anywhere.
    #[clap(long)]
    pub toggle_favorite: Option<usize>,
}
