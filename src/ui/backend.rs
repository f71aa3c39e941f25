use crate::models::{ErrorResponse, Quote, QuotesResponse, SceneRequest, SceneResponse};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Used when the server fails without an `error` field.
pub const DEFAULT_GENERATE_ERROR: &str = "Failed to generate scene";

/// The two calls the front end makes against the server.
#[async_trait]
pub trait SceneBackend: Send + Sync {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>>;
    async fn generate_scene(&self, request: &SceneRequest) -> Result<String>;
}

/// Talks to a running server over HTTP.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
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
impl SceneBackend for HttpBackend {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        let response = self
            .client
            .get(format!("{}/api/quotes", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "Failed to fetch quotes: {}",
                response.status()
            )));
        }

        let body: QuotesResponse = response.json().await?;
        Ok(body.quotes)
    }

    async fn generate_scene(&self, request: &SceneRequest) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .ok()
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| DEFAULT_GENERATE_ERROR.to_string());
            return Err(Error::Api(message));
        }

        let scene: SceneResponse = serde_json::from_str(&body)?;
        Ok(scene.scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> SceneRequest {
        SceneRequest {
            quote: "Q".to_string(),
            author: "A".to_string(),
            prompt: "P".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_quotes_unwraps_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/quotes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "quotes": [{ "text": "T", "author": "A", "source": "", "tags": [] }]
            })))
            .mount(&server)
            .await;

        let quotes = HttpBackend::new(server.uri()).fetch_quotes().await.unwrap();
        assert_eq!(quotes, vec![Quote::new("T", "A")]);
    }

    #[tokio::test]
    async fn test_generate_scene_posts_request_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_json(serde_json::json!({
                "quote": "Q", "author": "A", "prompt": "P"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "scene": "FADE IN:" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let scene = HttpBackend::new(server.uri())
            .generate_scene(&request())
            .await
            .unwrap();
        assert_eq!(scene, "FADE IN:");
    }

    #[tokio::test]
    async fn test_generate_scene_surfaces_server_error_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "error": "Failed to generate scene. Please try again."
            })))
            .mount(&server)
            .await;

        let err = HttpBackend::new(server.uri())
            .generate_scene(&request())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate scene. Please try again.");
    }

    #[tokio::test]
    async fn test_generate_scene_defaults_message_without_error_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = HttpBackend::new(server.uri())
            .generate_scene(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(ref m) if m == DEFAULT_GENERATE_ERROR));
    }
}
