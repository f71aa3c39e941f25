//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] dotenvy::Error),

    #[error("Quote provider error: {0}")]
    QuoteProvider(String),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    /// The text-generation credential is missing or was rejected upstream.
    #[error("API key error: {0}")]
    ApiKey(String),

    /// Error payload returned by our own HTTP API.
    #[error("{0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
