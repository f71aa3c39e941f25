use super::QuoteService;
use crate::models::Quote;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockQuoteClient {
    quotes: Arc<Mutex<Vec<Quote>>>,
    failure: Option<String>,
    call_count: Arc<Mutex<usize>>,
}

impl MockQuoteClient {
    pub fn new() -> Self {
        Self {
            quotes: Arc::new(Mutex::new(Vec::new())),
            failure: None,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_quotes(self, quotes: Vec<Quote>) -> Self {
        *self.quotes.lock().unwrap() = quotes;
        self
    }

    /// Make every fetch fail with a provider error.
    pub fn with_failure(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockQuoteClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteService for MockQuoteClient {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        *self.call_count.lock().unwrap() += 1;

        match &self.failure {
            Some(message) => Err(Error::QuoteProvider(message.clone())),
            None => Ok(self.quotes.lock().unwrap().clone()),
        }
    }
}
