//! Data models and structures
//!
//! Defines quotes, scene requests, the JSON envelopes exchanged between the
//! front end and the server, and runtime configuration.

use serde::{Deserialize, Serialize};

/// A short attributed text snippet used as creative seed material.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            source: String::new(),
            tags: Vec::new(),
        }
    }
}

/// Everything the scene generator needs for one call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SceneRequest {
    pub quote: String,
    pub author: String,
    pub prompt: String,
}

impl SceneRequest {
    pub fn from_quote(quote: &Quote, prompt: impl Into<String>) -> Self {
        Self {
            quote: quote.text.clone(),
            author: quote.author.clone(),
            prompt: prompt.into(),
        }
    }
}

/// Body accepted by `POST /api/generate`. Every field may be absent or of
/// any JSON type on the wire; the handler decides what is usable.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateBody {
    #[serde(default)]
    pub quote: Option<serde_json::Value>,
    #[serde(default)]
    pub author: Option<serde_json::Value>,
    #[serde(default)]
    pub prompt: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotesResponse {
    pub quotes: Vec<Quote>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneResponse {
    pub scene: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Configuration
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_QUOTES_BASE_URL: &str = "https://api.quotify.top";

#[derive(Debug, Clone)]
pub struct Config {
    /// Absent keys are reported when a scene is requested, not at startup.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub quotes_base_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        ignore_missing_dotenv(dotenvy::dotenv())?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| crate::Error::Config(format!("PORT must be a valid u16: {}", e)))?,
            Err(_) => 3000,
        };

        Ok(Self {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            quotes_base_url: std::env::var("QUOTES_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_QUOTES_BASE_URL.to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
        })
    }
}

/// A missing `.env` is fine; one that exists but cannot be read is not.
fn ignore_missing_dotenv<T>(result: dotenvy::Result<T>) -> crate::Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}
