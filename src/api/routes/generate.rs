//! Scene generation endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde_json::Value;
use tracing::{error, info};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::models::{GenerateBody, SceneRequest, SceneResponse};

/// Decode the request body regardless of its declared content type.
///
/// A body that is not JSON, or is JSON `null`, cannot be generated from and
/// fails generically. Any other non-object JSON carries no fields.
fn decode(body: &[u8]) -> Result<GenerateBody, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        error!("Error generating scene: unreadable request body: {}", e);
        ApiError::GenerationFailed
    })?;

    match value {
        Value::Object(_) => serde_json::from_value(value).map_err(|e| {
            error!("Error generating scene: unexpected request body: {}", e);
            ApiError::GenerationFailed
        }),
        Value::Null => {
            error!("Error generating scene: request body is null");
            Err(ApiError::GenerationFailed)
        }
        _ => Ok(GenerateBody::default()),
    }
}

/// Read a loosely typed field as text. Strings pass through, other scalars
/// use their JSON text. `null`, `false`, `0` and `""` count as absent.
fn text_field(value: Option<Value>) -> Option<String> {
    let text = match value? {
        Value::Null => return None,
        Value::String(s) => s,
        Value::Bool(b) => b.then(|| "true".to_string())?,
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                return None;
            }
            n.to_string()
        }
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

/// Accept a body only when both quote and prompt are present and non-empty.
/// Author may be missing; the prompt is forwarded as sent.
fn validate(body: GenerateBody) -> Result<SceneRequest, ApiError> {
    match (text_field(body.quote), text_field(body.prompt)) {
        (Some(quote), Some(prompt)) => Ok(SceneRequest {
            quote,
            author: text_field(body.author).unwrap_or_default(),
            prompt,
        }),
        _ => Err(ApiError::Validation),
    }
}

/// POST /api/generate
async fn generate_scene(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SceneResponse>, ApiError> {
    let request = validate(decode(&body)?)?;

    info!(
        prompt_chars = request.prompt.chars().count(),
        "Generating scene"
    );

    match state.scenes.generate_scene(&request).await {
        Ok(scene) => Ok(Json(SceneResponse { scene })),
        Err(e) => {
            error!("Error generating scene: {}", e);
            Err(ApiError::from(e))
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(generate_scene))
}
