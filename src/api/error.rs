//! HTTP-facing error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::ErrorResponse;
use crate::Error;

pub const VALIDATION_MESSAGE: &str = "Quote and prompt are required";
pub const MISSING_KEY_MESSAGE: &str =
    "OpenAI API key not configured. Please set OPENAI_API_KEY in your environment or .env file";
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate scene. Please try again.";

/// Every failure `POST /api/generate` can surface to a client.
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Quote or prompt missing from the request.
    Validation,
    /// The text-generation credential is absent or was rejected.
    MissingCredential,
    /// Anything else that went wrong while generating.
    GenerationFailed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::MissingCredential | ApiError::GenerationFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Validation => VALIDATION_MESSAGE,
            ApiError::MissingCredential => MISSING_KEY_MESSAGE,
            ApiError::GenerationFailed => GENERATION_FAILED_MESSAGE,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::ApiKey(_) => ApiError::MissingCredential,
            _ => ApiError::GenerationFailed,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message().to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
