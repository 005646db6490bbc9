//! Shared information dialog state.
//!
//! DESIGN
//! ======
//! One dialog serves every trigger on the page. Opening while already open
//! overwrites the content in place; there is no stack. While open, the page
//! body's scrolling is suspended, and closing restores whatever inline
//! `overflow` the body had before the first open.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Body `overflow` applied while the dialog is open.
pub const SCROLL_LOCK_OVERFLOW: &str = "hidden";

pub const DEFAULT_TITLE: &str = "Information";
pub const DEFAULT_CONTENT: &str = "Additional information.";

/// Anything able to show the shared dialog.
pub trait OpenModal {
    fn open_modal(&mut self, title: &str, body_html: &str);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub title: String,
    /// Rendered as markup.
    pub body_html: String,
    saved_overflow: Option<String>,
}

impl ModalState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `title`/`body_html`.
    ///
    /// `current_overflow` is the body's inline overflow right now; it is only
    /// recorded on a closed → open transition. Returns the overflow to apply.
    pub fn open(&mut self, title: &str, body_html: &str, current_overflow: &str) -> &'static str {
        if !self.open {
            self.saved_overflow = Some(current_overflow.to_owned());
            self.open = true;
        }
        title.clone_into(&mut self.title);
        body_html.clone_into(&mut self.body_html);
        SCROLL_LOCK_OVERFLOW
    }

    /// Hide the dialog. Returns the overflow to restore, or `None` when the
    /// dialog was already closed.
    pub fn close(&mut self) -> Option<String> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(self.saved_overflow.take().unwrap_or_default())
    }

    /// Whether a keydown with `key` should dismiss the dialog.
    #[must_use]
    pub fn closes_on_key(&self, key: &str) -> bool {
        self.open && key == "Escape"
    }
}

/// Title/content for an `.interactive-element` trigger, with defaults for
/// missing attributes.
#[must_use]
pub fn trigger_content(title: Option<String>, content: Option<String>) -> (String, String) {
    (
        title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
        content.unwrap_or_else(|| DEFAULT_CONTENT.to_owned()),
    )
}
