//! Writer's Unblocker - quote-seeded screenplay scene generator
//!
//! Serves a rotating batch of inspirational quotes and turns a chosen quote
//! plus a short scene description into an AI-written screenplay scene. The
//! `ui` module holds the presentation state that drives both endpoints.

pub mod ai;
pub mod api;
pub mod error;
pub mod models;
pub mod prompts;
pub mod quotes;
pub mod ui;

pub use error::{Error, Result};
