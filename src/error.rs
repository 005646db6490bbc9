//! Setup errors for the enhancer behaviors.
//!
//! ERROR HANDLING
//! ==============
//! Missing page anchors are expected: pages opt into behaviors by including
//! the markup. The composition root logs every error at a level matching
//! [`EnhanceError::is_expected`] and moves on to the next behavior.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("page anchor not found: {0}")]
    MissingAnchor(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid enhancer config: {0}")]
    Config(#[from] serde_json::Error),
}

impl EnhanceError {
    /// Whether the error reflects page markup opting out of a behavior.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::MissingAnchor(_))
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for EnhanceError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
