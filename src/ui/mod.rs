//! Presentation state for the three-step writing flow
//!
//! Toolkit-agnostic state holders: a quote browser, a description form, a
//! scene viewer, and the screen controller that composes them. They talk to
//! the server through [`SceneBackend`]; `terminal` renders them on a TTY.

pub mod backend;
pub mod browser;
pub mod form;
pub mod mock;
pub mod screen;
pub mod terminal;
pub mod viewer;

pub use backend::{HttpBackend, SceneBackend};
pub use browser::QuoteBrowser;
pub use form::DescriptionForm;
pub use mock::MockBackend;
pub use screen::{Layout, ScreenController, Section, Step};
pub use viewer::{Clipboard, Osc52Clipboard, SceneDisplay, SceneViewer};
