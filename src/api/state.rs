//! Shared application state.

use std::sync::Arc;

use crate::ai::{OpenAiSceneClient, SceneService};
use crate::models::Config;
use crate::quotes::{QuoteService, QuotifyClient};

/// Services shared by all request handlers. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<dyn QuoteService>,
    pub scenes: Arc<dyn SceneService>,
}

impl AppState {
    pub fn new(quotes: Arc<dyn QuoteService>, scenes: Arc<dyn SceneService>) -> Self {
        Self { quotes, scenes }
    }

    /// Wire the real upstream clients from configuration.
    pub fn from_config(config: &Config) -> Self {
        // Reuse one HTTP connection pool across upstream clients.
        let http_client = reqwest::Client::new();

        let quotes =
            QuotifyClient::new_with_client(config.quotes_base_url.clone(), http_client.clone());
        let scenes = OpenAiSceneClient::new_with_client(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            http_client,
        )
        .with_base_url(config.openai_base_url.clone());

        if config.openai_api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY is not set; scene generation will fail until it is");
        }

        Self::new(Arc::new(quotes), Arc::new(scenes))
    }
}
