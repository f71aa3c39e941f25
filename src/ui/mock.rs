use super::SceneBackend;
use crate::models::{Quote, SceneRequest};
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// In-memory backend: serves queued quote batches and a fixed scene outcome.
#[derive(Clone)]
pub struct MockBackend {
    quote_batches: Arc<Mutex<VecDeque<Vec<Quote>>>>,
    quotes_failure: bool,
    scene: std::result::Result<String, String>,
    requests: Arc<Mutex<Vec<SceneRequest>>>,
    quote_calls: Arc<Mutex<usize>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            quote_batches: Arc::new(Mutex::new(VecDeque::new())),
            quotes_failure: false,
            scene: Ok("FADE IN:".to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
            quote_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a batch; batches are served in order and the last one repeats.
    pub fn with_quote_batch(self, quotes: Vec<Quote>) -> Self {
        self.quote_batches.lock().unwrap().push_back(quotes);
        self
    }

    pub fn with_quotes_failure(mut self) -> Self {
        self.quotes_failure = true;
        self
    }

    pub fn with_scene(mut self, scene: &str) -> Self {
        self.scene = Ok(scene.to_string());
        self
    }

    /// Fail generation with the message a server would put in `error`.
    pub fn with_scene_error(mut self, message: &str) -> Self {
        self.scene = Err(message.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<SceneRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn get_generate_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn get_quote_call_count(&self) -> usize {
        *self.quote_calls.lock().unwrap()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SceneBackend for MockBackend {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        *self.quote_calls.lock().unwrap() += 1;
        if self.quotes_failure {
            return Err(Error::Api("Failed to fetch quotes".to_string()));
        }

        let mut batches = self.quote_batches.lock().unwrap();
        let batch = if batches.len() > 1 {
            batches.pop_front().unwrap_or_default()
        } else {
            batches.front().cloned().unwrap_or_default()
        };
        Ok(batch)
    }

    async fn generate_scene(&self, request: &SceneRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.scene.clone().map_err(Error::Api)
    }
}
