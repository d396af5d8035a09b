//! Endpoint constants and helpers shared by the fetch client and the app.

/// Default base URL of the quotes API.
pub const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com";
/// Path of the quotes endpoint, relative to the base URL.
pub const QUOTES_PATH: &str = "/v1/quotes";
/// Request header carrying the static API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";
/// Environment variable the app reads the API key from.
pub const API_KEY_ENV: &str = "QUOTES_API_KEY";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "QUOTES_API_URL";

/// Builds the absolute quotes endpoint URL for the given base.
pub fn quotes_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), QUOTES_PATH)
}
