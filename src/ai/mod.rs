//! AI service integration for scene generation
//!
//! Turns a quote, its author, and a short scene description into a
//! screenplay-formatted scene via a chat-completion provider.

pub mod mock;
pub mod openai;

pub use mock::MockSceneClient;
pub use openai::OpenAiSceneClient;

use crate::models::SceneRequest;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SceneService: Send + Sync {
    /// Returns the generated scene text exactly as the provider wrote it.
    async fn generate_scene(&self, request: &SceneRequest) -> Result<String>;
}
