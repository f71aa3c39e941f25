//! Top-level screen: which step the writer is on and what each section holds.

use super::{DescriptionForm, QuoteBrowser, SceneBackend, SceneDisplay, SceneViewer};
use crate::models::Quote;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Browse,
    Describe,
    View,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One section at a time: browse, then describe, then view.
    Stepped,
    /// All three sections on one page.
    SinglePage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Quotes,
    Form,
    Scene,
}

/// Navigation state only; nothing here outlives the process.
#[derive(Debug)]
pub struct ScreenController {
    layout: Layout,
    step: Step,
    browser: QuoteBrowser,
    form: DescriptionForm,
    viewer: SceneViewer,
    selected: Option<Quote>,
    scene: Option<String>,
    generating: bool,
}

impl ScreenController {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            step: Step::Browse,
            browser: QuoteBrowser::new(),
            form: DescriptionForm::new(),
            viewer: SceneViewer::new(),
            selected: None,
            scene: None,
            generating: false,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn browser(&self) -> &QuoteBrowser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut QuoteBrowser {
        &mut self.browser
    }

    pub fn form(&self) -> &DescriptionForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut DescriptionForm {
        &mut self.form
    }

    pub fn viewer(&self) -> &SceneViewer {
        &self.viewer
    }

    pub fn selected(&self) -> Option<&Quote> {
        self.selected.as_ref()
    }

    pub fn scene(&self) -> Option<&str> {
        self.scene.as_deref()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn scene_display(&self) -> SceneDisplay<'_> {
        self.viewer.display(self.scene.as_deref(), self.generating)
    }

    pub fn visible_sections(&self) -> Vec<Section> {
        match (self.layout, self.step) {
            (Layout::SinglePage, _) => vec![Section::Quotes, Section::Form, Section::Scene],
            (Layout::Stepped, Step::Browse) => vec![Section::Quotes],
            (Layout::Stepped, Step::Describe) => vec![Section::Form],
            (Layout::Stepped, Step::View) => vec![Section::Scene],
        }
    }

    pub async fn load_quotes(&mut self, backend: &dyn SceneBackend) -> bool {
        self.browser.refresh(backend).await
    }

    /// Select the quote under the browser cursor.
    pub fn select_current(&mut self) -> bool {
        match self.browser.current().cloned() {
            Some(quote) => {
                self.select(quote);
                true
            }
            None => false,
        }
    }

    /// A new selection drops any scene written for the previous one.
    pub fn select(&mut self, quote: Quote) {
        self.selected = Some(quote);
        self.scene = None;
        self.step = Step::Describe;
    }

    /// Submit the form; a returned scene moves the screen to the view step.
    pub async fn generate(&mut self, backend: &dyn SceneBackend) -> bool {
        let scene = self
            .form
            .submit(self.selected.as_ref(), backend, &mut self.generating)
            .await;

        match scene {
            Some(scene) => {
                self.scene = Some(scene);
                self.step = Step::View;
                true
            }
            None => false,
        }
    }

    pub fn start_over(&mut self) {
        self.selected = None;
        self.scene = None;
        self.step = Step::Browse;
    }
}
