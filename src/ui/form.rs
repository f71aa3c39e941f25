//! Scene description form.

use super::SceneBackend;
use crate::models::{Quote, SceneRequest};
use crate::Error;
use tracing::{error, info};

/// Soft limit shown next to the prompt; the server does not enforce it.
pub const MAX_PROMPT_CHARS: usize = 500;
pub const PLACEHOLDER: &str = "A tense confrontation between old friends at a funeral";

pub const NO_QUOTE_ERROR: &str = "Please select a quote first";
pub const EMPTY_PROMPT_ERROR: &str = "Please enter a scene description";
pub const TRANSPORT_ERROR: &str = "Something went wrong";

const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Default)]
pub struct DescriptionForm {
    prompt: String,
    error: Option<String>,
}

impl DescriptionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn char_count(&self) -> usize {
        self.prompt.chars().count()
    }

    /// e.g. `42 / 500`
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.char_count(), MAX_PROMPT_CHARS)
    }

    pub fn can_submit(&self, selected: Option<&Quote>, generating: bool) -> bool {
        selected.is_some() && !self.prompt.trim().is_empty() && !generating
    }

    /// Validate locally, then ask the backend for a scene.
    ///
    /// `generating` is raised for the duration of the backend call and is
    /// always lowered again before returning. A submit while it is already
    /// raised is ignored.
    pub async fn submit(
        &mut self,
        selected: Option<&Quote>,
        backend: &dyn SceneBackend,
        generating: &mut bool,
    ) -> Option<String> {
        if *generating {
            return None;
        }

        let Some(quote) = selected else {
            self.error = Some(NO_QUOTE_ERROR.to_string());
            return None;
        };

        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            self.error = Some(EMPTY_PROMPT_ERROR.to_string());
            return None;
        }

        self.error = None;
        let request = SceneRequest::from_quote(quote, prompt);

        *generating = true;
        let result = backend.generate_scene(&request).await;
        *generating = false;

        match result {
            Ok(scene) => {
                info!("Received scene ({} chars)", scene.chars().count());
                Some(scene)
            }
            Err(e) => {
                error!("Scene generation failed: {}", e);
                self.error = Some(match e {
                    Error::Api(message) => message,
                    _ => TRANSPORT_ERROR.to_string(),
                });
                None
            }
        }
    }
}

/// First 80 characters of the quote, as shown above the prompt field.
pub fn quote_preview(quote: &Quote) -> String {
    let head: String = quote.text.chars().take(PREVIEW_CHARS).collect();
    format!("\u{201c}{}...\u{201d}", head)
}
