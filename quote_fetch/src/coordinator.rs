//! Two-way join over independent quote fetches.
//!
//! The coordinator issues two uncorrelated fetches as separate tasks and
//! completes only after both have finished, however they ended. It never
//! collapses a partial failure into a total one and never retries a failed
//! half; each slot carries its own outcome to the caller.
use std::sync::Arc;

use log::warn;
use tokio::task::JoinError;

use quote_common::{FetchError, FetchOutcome};

use crate::client::QuoteSource;

/// Joins exactly two independent fetches into one combined completion.
pub struct DualFetchCoordinator {
    source: Arc<dyn QuoteSource>,
}

impl DualFetchCoordinator {
    /// Creates a coordinator over the given quote source.
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self { source }
    }

    /// Fetches two quotes concurrently and returns both outcomes.
    ///
    /// The two calls are independent tasks, not a batch request: nothing is
    /// shared or deduplicated between them and each may succeed or fail on
    /// its own. The pair is delivered only once BOTH tasks have finished;
    /// there is no partial-result short-circuiting and no cancellation.
    /// Calling this again while a previous pair is still outstanding simply
    /// creates two more independent requests.
    pub async fn fetch_pair(&self) -> (FetchOutcome, FetchOutcome) {
        let first = tokio::spawn({
            let source = Arc::clone(&self.source);
            async move { source.fetch().await }
        });
        let second = tokio::spawn({
            let source = Arc::clone(&self.source);
            async move { source.fetch().await }
        });

        let (first, second) = tokio::join!(first, second);
        (flatten(first), flatten(second))
    }
}

/// Maps a task-level failure into the affected slot only.
///
/// A fetch task fails to join solely on panic or runtime shutdown; the other
/// slot is untouched.
fn flatten(joined: Result<FetchOutcome, JoinError>) -> FetchOutcome {
    joined.unwrap_or_else(|e| {
        warn!("Fetch task failed to join: {}", e);
        Err(FetchError::BadResponse(e.to_string()))
    })
}
