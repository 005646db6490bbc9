//! Light/dark theme preference.
//!
//! The preference is a single key in origin-scoped storage. Reads fall back
//! to [`Theme::Light`] when the key is unset or holds anything other than a
//! known theme name; there is no error path.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Attribute on `<html>` carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Transition applied to `<body>` while the theme flips.
pub const THEME_TRANSITION_CSS: &str = "background-color 0.3s ease";

const SUN_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M12 3a1 1 0 011 1v1a1 1 0 11-2 0V4a1 1 0 011-1zm4.22 2.78a1 1 0 011.415 1.415l-.707.707a1 1 0 11-1.414-1.415l.706-.707zM21 11a1 1 0 110 2h-1a1 1 0 110-2h1zM6.343 6.343a1 1 0 011.415 0l.707.707A1 1 0 117.07 8.465l-.707-.707a1 1 0 010-1.415zM12 18a1 1 0 011 1v1a1 1 0 11-2 0v-1a1 1 0 011-1zm7.071-2.929a1 1 0 011.415 1.415l-.707.707a1 1 0 11-1.414-1.415l.706-.707zM5.636 17.072a1 1 0 010-1.415l.707-.707a1 1 0 111.414 1.414l-.707.707a1 1 0 01-1.414 0zM4 11a1 1 0 110 2H3a1 1 0 110-2h1zm1.636-6.364a1 1 0 010-1.414l.707-.707a1 1 0 111.414 1.414l-.707.707a1 1 0 01-1.414 0z"/></svg>"#;

const MOON_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M21.64 13a1 1 0 00-1.05-.14 8.05 8.05 0 01-10.45-10.45 1 1 0 00-1.19-1.09A10 10 0 1022.74 14.2a1 1 0 00-1.1-1.2z"/></svg>"#;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle icon markup: a sun while light, a moon while dark.
    #[must_use]
    pub fn icon_svg(self) -> &'static str {
        match self {
            Self::Light => SUN_ICON,
            Self::Dark => MOON_ICON,
        }
    }
}

/// Persistent key-value storage scoped to the browsing origin.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// In-memory store for tests and storage-less environments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Reads and writes the theme preference through a [`PreferenceStore`].
pub struct ThemeController<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Stored theme, or `Light` when unset or unrecognized.
    #[must_use]
    pub fn get_theme(&self) -> Theme {
        let Some(raw) = self.store.get(&self.key) else {
            return Theme::Light;
        };
        Theme::parse(&raw).unwrap_or_else(|| {
            log::debug!("ignoring unknown stored theme {raw:?}");
            Theme::Light
        })
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set(&self.key, theme.as_str());
    }

    /// Flip the theme currently shown on the page and persist the result.
    ///
    /// `current` is the root element's theme attribute; a missing or unknown
    /// value counts as light.
    pub fn toggle(&self, current: Option<&str>) -> Theme {
        let next = current.and_then(Theme::parse).unwrap_or_default().flip();
        self.set_theme(next);
        next
    }
}
