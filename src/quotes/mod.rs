//! Quote supply for the inspiration carousel
//!
//! Fetches a fresh batch from the upstream quote API and substitutes a
//! built-in list whenever that call fails for any reason.

pub mod client;
pub mod fallback;
pub mod mock;

pub use client::QuotifyClient;
pub use fallback::fallback_quotes;
pub use mock::MockQuoteClient;

use crate::models::Quote;
use crate::Result;
use async_trait::async_trait;
use tracing::{error, info};

/// Number of quotes requested from upstream per batch.
pub const BATCH_SIZE: usize = 5;

#[async_trait]
pub trait QuoteService: Send + Sync {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>>;
}

/// Make one upstream attempt and fall back to the built-in list on failure.
///
/// Upstream results are passed through untouched. Errors are logged and
/// never reach the caller.
pub async fn supply(service: &dyn QuoteService) -> Vec<Quote> {
    match service.fetch_quotes().await {
        Ok(quotes) => {
            info!("Fetched {} quotes from upstream", quotes.len());
            quotes
        }
        Err(e) => {
            error!("Error fetching quotes: {}", e);
            fallback_quotes()
        }
    }
}
