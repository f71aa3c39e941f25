use super::SceneService;
use crate::models::SceneRequest;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
enum MockFailure {
    ApiKey(String),
    Provider(String),
}

#[derive(Clone)]
pub struct MockSceneClient {
    scene_responses: Arc<Mutex<Vec<String>>>,
    failure: Option<MockFailure>,
    requests: Arc<Mutex<Vec<SceneRequest>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockSceneClient {
    pub fn new() -> Self {
        Self {
            scene_responses: Arc::new(Mutex::new(Vec::new())),
            failure: None,
            requests: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_scene_response(self, response: String) -> Self {
        self.scene_responses.lock().unwrap().push(response);
        self
    }

    /// Fail every call as if the credential were missing or rejected.
    pub fn with_api_key_error(mut self, message: &str) -> Self {
        self.failure = Some(MockFailure::ApiKey(message.to_string()));
        self
    }

    /// Fail every call with a generic provider error.
    pub fn with_provider_error(mut self, message: &str) -> Self {
        self.failure = Some(MockFailure::Provider(message.to_string()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_requests(&self) -> Vec<SceneRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockSceneClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SceneService for MockSceneClient {
    async fn generate_scene(&self, request: &SceneRequest) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.requests.lock().unwrap().push(request.clone());

        match &self.failure {
            Some(MockFailure::ApiKey(message)) => return Err(Error::ApiKey(message.clone())),
            Some(MockFailure::Provider(message)) => {
                return Err(Error::AiProvider(message.clone()))
            }
            None => {}
        }

        let responses = self.scene_responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(format!(
                "INT. WRITER'S ROOM - NIGHT\n\nA writer stares at \"{}\" and types: {}",
                request.quote, request.prompt
            ))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SceneRequest {
        SceneRequest {
            quote: "Happiness is not by chance, but by choice.".to_string(),
            author: "Jim Rohn".to_string(),
            prompt: "a wedding rehearsal".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_scene_client_default_scene() {
        let client = MockSceneClient::new();

        let scene = client.generate_scene(&request()).await.unwrap();
        assert!(scene.contains("Happiness is not by chance"));
        assert!(scene.contains("a wedding rehearsal"));
    }

    #[tokio::test]
    async fn test_mock_scene_client_custom_responses_cycle() {
        let client = MockSceneClient::new()
            .with_scene_response("Scene one".to_string())
            .with_scene_response("Scene two".to_string());

        assert_eq!(client.generate_scene(&request()).await.unwrap(), "Scene one");
        assert_eq!(client.generate_scene(&request()).await.unwrap(), "Scene two");
        assert_eq!(client.generate_scene(&request()).await.unwrap(), "Scene one");
    }

    #[tokio::test]
    async fn test_mock_scene_client_records_requests() {
        let client = MockSceneClient::new().with_provider_error("boom");

        assert!(client.generate_scene(&request()).await.is_err());
        assert_eq!(client.get_call_count(), 1);
        assert_eq!(client.get_requests(), vec![request()]);
    }
}
