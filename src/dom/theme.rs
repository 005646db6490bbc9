//! Theme toggle button and `localStorage` persistence.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, Storage};

use super::{body, clear_style, listen, query_one, set_style};
use crate::config::EnhancerConfig;
use crate::error::EnhanceError;
use crate::theme::{PreferenceStore, THEME_ATTRIBUTE, THEME_TRANSITION_CSS, Theme, ThemeController};

/// [`PreferenceStore`] backed by `window.localStorage`.
///
/// Private browsing modes may deny storage; reads then miss and writes are
/// dropped.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::debug!("localStorage unavailable; theme will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::debug!("failed to persist {key}: {err:?}");
        }
    }
}

/// Apply the stored theme and wire the `.theme-toggle` button.
pub fn setup(document: &Document, config: &EnhancerConfig) -> Result<(), EnhanceError> {
    let toggle: Element = query_one(document, ".theme-toggle")?;
    let root = document.document_element().ok_or(EnhanceError::NoDocument)?;
    let page_body = body(document)?;

    let themes = ThemeController::new(LocalStorage::new(), config.storage_key.clone());
    let theme = themes.get_theme();
    apply(&root, &toggle, theme)?;
    log::info!("theme: {}", theme.as_str());

    let button = toggle.clone();
    let transition_ms = config.theme_transition_ms;
    listen(&toggle, "click", move |_| {
        let current = root.get_attribute(THEME_ATTRIBUTE);
        let next = themes.toggle(current.as_deref());
        if let Err(err) = apply(&root, &button, next) {
            log::warn!("theme toggle failed: {err}");
        }

        set_style(&page_body, "transition", THEME_TRANSITION_CSS);
        let page_body = page_body.clone();
        Timeout::new(transition_ms, move || clear_style(&page_body, "transition")).forget();
    })
}

fn apply(root: &Element, toggle: &Element, theme: Theme) -> Result<(), EnhanceError> {
    root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    toggle.set_inner_html(theme.icon_svg());
    Ok(())
}
