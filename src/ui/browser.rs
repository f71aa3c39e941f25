//! Quote carousel state.

use super::SceneBackend;
use crate::models::Quote;
use tracing::error;

/// A batch of quotes and a cursor into it.
#[derive(Debug, Default)]
pub struct QuoteBrowser {
    quotes: Vec<Quote>,
    index: usize,
}

impl QuoteBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes, index: 0 }
    }

    /// Fetch a new batch. On success the list is replaced and the cursor
    /// returns to the first quote; on failure the current list stays.
    pub async fn refresh(&mut self, backend: &dyn SceneBackend) -> bool {
        match backend.fetch_quotes().await {
            Ok(quotes) => {
                self.quotes = quotes;
                self.index = 0;
                true
            }
            Err(e) => {
                error!("Failed to fetch quotes: {}", e);
                false
            }
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Quote> {
        self.quotes.get(self.index)
    }

    pub fn next_quote(&mut self) {
        if self.quotes.is_empty() {
            return;
        }
        self.index = if self.index + 1 >= self.quotes.len() {
            0
        } else {
            self.index + 1
        };
    }

    pub fn previous_quote(&mut self) {
        if self.quotes.is_empty() {
            return;
        }
        self.index = if self.index == 0 {
            self.quotes.len() - 1
        } else {
            self.index - 1
        };
    }

    /// Move straight to `index`. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.quotes.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Whether the quote under the cursor is the selected one. Quotes match
    /// on text, not on position.
    pub fn is_current_selected(&self, selected: Option<&Quote>) -> bool {
        match (self.current(), selected) {
            (Some(current), Some(selected)) => current.text == selected.text,
            _ => false,
        }
    }

    pub fn position_of(&self, selected: &Quote) -> Option<usize> {
        self.quotes.iter().position(|q| q.text == selected.text)
    }
}
