use super::client::OpenAiHttpClient;
use super::types::{ChatCompletionRequest, ChatMessage};
use crate::ai::SceneService;
use crate::models::SceneRequest;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const TEMPERATURE: f64 = 0.8;
const MAX_TOKENS: u32 = 1500;
const GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

pub struct OpenAiSceneClient {
    http: OpenAiHttpClient,
    model: String,
}

impl OpenAiSceneClient {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self::new_with_client(api_key, model, Client::new())
    }

    pub fn new_with_client(api_key: Option<String>, model: String, client: Client) -> Self {
        Self {
            http: OpenAiHttpClient::new_with_client(api_key, GENERATION_TIMEOUT, client),
            model,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    fn build_request(&self, request: &SceneRequest) -> ChatCompletionRequest {
        let user_prompt = prompts::render(
            prompts::SCENE_USER,
            &[
                ("quote", &request.quote),
                ("author", &request.author),
                ("prompt", &request.prompt),
            ],
        );

        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompts::SCENE_SYSTEM),
                ChatMessage::user(user_prompt),
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

#[async_trait]
impl SceneService for OpenAiSceneClient {
    async fn generate_scene(&self, request: &SceneRequest) -> Result<String> {
        tracing::debug!(model = %self.model, "Requesting scene generation");

        let response = self.http.chat_completion(self.build_request(request)).await?;

        let Some(choice) = response.choices.into_iter().next() else {
            return Err(Error::AiProvider("No scene generated".to_string()));
        };
        if choice.finish_reason.as_deref() == Some("length") {
            tracing::warn!("Scene completion stopped at the {} token limit", MAX_TOKENS);
        }

        choice
            .message
            .content
            .filter(|scene| !scene.is_empty())
            .ok_or_else(|| Error::AiProvider("No scene generated".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_request() -> SceneRequest {
        SceneRequest {
            quote: "Those who fail together, grow together.".to_string(),
            author: "Chinese Proverb".to_string(),
            prompt: "Two climbers stranded on a ledge".to_string(),
        }
    }

    fn completion(content: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        }))
    }

    #[tokio::test]
    async fn test_generate_scene_returns_completion_verbatim() {
        let server = MockServer::start().await;
        let scene = "EXT. MOUNTAIN LEDGE - NIGHT\n\nWind howls.\n\nMAYA\n(shouting)\nHold on!\n";

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(completion(serde_json::json!(scene)))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiSceneClient::new(Some("test-key".to_string()), "gpt-4o-mini".into())
            .with_base_url(server.uri());

        let generated = client.generate_scene(&sample_request()).await.unwrap();
        assert_eq!(generated, scene);
    }

    #[tokio::test]
    async fn test_generate_scene_sends_fixed_sampling_parameters() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "temperature": 0.8,
                "max_tokens": 1500
            })))
            .and(body_string_contains("\"role\":\"system\""))
            .and(body_string_contains(
                "Inspiring Quote: \\\"Those who fail together, grow together.\\\" — Chinese Proverb",
            ))
            .and(body_string_contains("Scene Context: Two climbers stranded on a ledge"))
            .respond_with(completion(serde_json::json!("INT. TENT - NIGHT")))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiSceneClient::new(Some("key".to_string()), "gpt-4o-mini".into())
            .with_base_url(server.uri());

        client.generate_scene(&sample_request()).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_completion_is_generation_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(completion(serde_json::json!("")))
            .mount(&server)
            .await;

        let client = OpenAiSceneClient::new(Some("key".to_string()), "gpt-4o-mini".into())
            .with_base_url(server.uri());

        let err = client.generate_scene(&sample_request()).await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_no_choices_is_generation_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": []
            })))
            .mount(&server)
            .await;

        let client = OpenAiSceneClient::new(Some("key".to_string()), "gpt-4o-mini".into())
            .with_base_url(server.uri());

        let err = client.generate_scene(&sample_request()).await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_rejected_key_is_api_key_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "code": "invalid_api_key"
                }
            })))
            .mount(&server)
            .await;

        let client = OpenAiSceneClient::new(Some("wrong".to_string()), "gpt-4o-mini".into())
            .with_base_url(server.uri());

        let err = client.generate_scene(&sample_request()).await.unwrap_err();
        assert!(matches!(err, Error::ApiKey(_)));
    }

    #[tokio::test]
    async fn test_missing_key_never_reaches_provider() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(completion(serde_json::json!("unused")))
            .expect(0)
            .mount(&server)
            .await;

        let client =
            OpenAiSceneClient::new(None, "gpt-4o-mini".into()).with_base_url(server.uri());

        let err = client.generate_scene(&sample_request()).await.unwrap_err();
        assert!(matches!(err, Error::ApiKey(_)));
    }

    #[tokio::test]
    async fn test_truncated_completion_is_still_returned() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains(
                "inspired by this quote and context.\"}",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{
                    "message": { "role": "assistant", "content": "INT. BARN - DUSK\n\nHENRY" },
                    "finish_reason": "length"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiSceneClient::new(Some("key".to_string()), "gpt-4o-mini".into())
            .with_base_url(server.uri());

        let generated = client.generate_scene(&sample_request()).await.unwrap();
        assert_eq!(generated, "INT. BARN - DUSK\n\nHENRY");
    }
}
