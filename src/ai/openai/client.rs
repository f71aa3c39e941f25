use super::types::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse};
use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Lightweight OpenAI REST client shared by provider modules.
pub struct OpenAiHttpClient {
    pub(crate) client: Client,
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: String,
    timeout: Duration,
}

impl OpenAiHttpClient {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Self {
        Self::new_with_client(api_key, timeout, Client::new())
    }

    pub fn new_with_client(api_key: Option<String>, timeout: Duration, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::ApiKey("OPENAI_API_KEY is not set".to_string()))
    }

    pub async fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Resp> {
        let api_key = self.api_key()?;
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to OpenAI: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("OpenAI API error (status {}): {}", status, error_text);
            return Err(classify_failure(status, &error_text));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}\nBody: {}", e, body);
            Error::AiProvider(format!("Failed to parse OpenAI response: {}", e))
        })
    }

    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.post("/v1/chat/completions", &request).await
    }
}

/// Rejected credentials are reported separately from every other failure.
fn classify_failure(status: StatusCode, body: &str) -> Error {
    let detail = serde_json::from_str::<ApiErrorBody>(body).ok().map(|b| b.error);
    let invalid_key = status == StatusCode::UNAUTHORIZED
        || detail
            .as_ref()
            .and_then(|d| d.code.as_deref())
            .is_some_and(|code| code == "invalid_api_key");

    let message = detail
        .map(|d| d.message)
        .unwrap_or_else(|| body.to_string());

    if invalid_key {
        Error::ApiKey(message)
    } else {
        Error::AiProvider(format!("OpenAI API error (status {}): {}", status, message))
    }
}
