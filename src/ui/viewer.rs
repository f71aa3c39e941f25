//! Generated scene display, copy and download.

use crate::Result;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const GENERATING_TEXT: &str = "Writing your scene...";
pub const EMPTY_TEXT: &str = "Your generated screenplay scene will appear here";
pub const EMPTY_HINT: &str = "Select a quote and describe your scene to get started";

/// What the scene panel should show right now.
#[derive(Debug, PartialEq, Eq)]
pub enum SceneDisplay<'a> {
    Generating,
    Empty,
    Scene(&'a str),
}

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Puts text on the system clipboard through the terminal's OSC 52 escape.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let payload = base64::engine::general_purpose::STANDARD.encode(text);
        write!(self.out, "\x1b]52;c;{}\x07", payload)?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct SceneViewer;

impl SceneViewer {
    pub fn new() -> Self {
        Self
    }

    /// The generating state wins over any scene still held from before.
    pub fn display<'a>(&self, scene: Option<&'a str>, generating: bool) -> SceneDisplay<'a> {
        if generating {
            return SceneDisplay::Generating;
        }
        match scene {
            Some(scene) if !scene.is_empty() => SceneDisplay::Scene(scene),
            _ => SceneDisplay::Empty,
        }
    }

    /// Best effort: a failing clipboard is logged and reported as `false`.
    pub fn copy(&self, scene: Option<&str>, clipboard: &mut dyn Clipboard) -> bool {
        let Some(scene) = scene.filter(|s| !s.is_empty()) else {
            return false;
        };

        match clipboard.set_text(scene) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to copy: {}", e);
                false
            }
        }
    }

    /// Write the scene to `scene-<epoch millis>.txt` inside `dir`.
    /// Returns `None` when there is nothing to save.
    pub fn download(&self, scene: Option<&str>, dir: &Path) -> Result<Option<PathBuf>> {
        let Some(scene) = scene.filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        let path = dir.join(download_file_name(Utc::now()));
        fs::write(&path, scene)?;
        info!("Saved scene to {}", path.display());
        Ok(Some(path))
    }
}

pub fn download_file_name(now: DateTime<Utc>) -> String {
    format!("scene-{}.txt", now.timestamp_millis())
}
