pub mod client;
pub mod scene;
pub mod types;

pub use client::OpenAiHttpClient;
pub use scene::OpenAiSceneClient;
