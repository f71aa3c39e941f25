use super::{QuoteService, BATCH_SIZE};
use crate::models::Quote;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use std::time::Duration;

const QUOTES_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Quotify random-quote API.
pub struct QuotifyClient {
    client: Client,
    base_url: String,
}

impl QuotifyClient {
    pub fn new(base_url: String) -> Self {
        Self::new_with_client(base_url, Client::new())
    }

    pub fn new_with_client(base_url: String, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl QuoteService for QuotifyClient {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        let url = format!("{}/random", self.base_url);
        tracing::debug!("Requesting {} quotes from {}", BATCH_SIZE, url);

        let response = self
            .client
            .get(&url)
            .query(&[("quantity", BATCH_SIZE)])
            .header(CACHE_CONTROL, "no-cache")
            .timeout(QUOTES_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::QuoteProvider(format!(
                "Failed to fetch quotes: {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Unparseable quote response: {}", e);
            Error::QuoteProvider(format!("Failed to parse quotes: {}", e))
        })
    }
}
