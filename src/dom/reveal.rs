//! Reveal-on-scroll behaviors: cards, timeline items, and images.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{add_class, observer, query_all, set_style};
use crate::config::EnhancerConfig;
use crate::error::EnhanceError;
use crate::reveal::RevealPolicy;
use crate::scroll::{TIMELINE_HIDDEN_TRANSFORM, TIMELINE_SHOWN_TRANSFORM, TIMELINE_TRANSITION};

/// Class applied to revealed cards, timeline items, and images.
pub const LOADED_CLASS: &str = "loaded";

/// `.card` and `.timeline-item` fade in once.
pub fn setup_scroll_animations(document: &Document, config: &EnhancerConfig) -> Result<(), EnhanceError> {
    let elements: Vec<Element> = query_all(document, ".card, .timeline-item")?;
    if elements.is_empty() {
        return Err(EnhanceError::MissingAnchor(".card, .timeline-item"));
    }
    observer::watch(elements, &config.scroll_reveal, RevealPolicy::OneShot, |el, _| {
        add_class(el, LOADED_CLASS);
    })
}

/// Timeline items slide in. The watch stays subscribed, so the final style is
/// re-applied on every re-entry.
pub fn setup_timeline(document: &Document, config: &EnhancerConfig) -> Result<(), EnhanceError> {
    let items: Vec<HtmlElement> = query_all(document, ".timeline-item")?;
    if items.is_empty() {
        return Err(EnhanceError::MissingAnchor(".timeline-item"));
    }
    for item in &items {
        set_style(item, "opacity", "0");
        set_style(item, "transform", TIMELINE_HIDDEN_TRANSFORM);
        set_style(item, "transition", TIMELINE_TRANSITION);
    }
    let elements = items.into_iter().map(Element::from).collect();
    observer::watch(elements, &config.timeline_reveal, RevealPolicy::Repeating, |el, _| {
        let Some(item) = el.dyn_ref::<HtmlElement>() else {
            return;
        };
        set_style(item, "opacity", "1");
        set_style(item, "transform", TIMELINE_SHOWN_TRANSFORM);
    })
}

/// Images get `loaded` on first sight, then stop being watched.
pub fn setup_image_reveal(document: &Document, config: &EnhancerConfig) -> Result<(), EnhanceError> {
    let images: Vec<Element> = query_all(document, "img[src]")?;
    if images.is_empty() {
        return Err(EnhanceError::MissingAnchor("img[src]"));
    }
    observer::watch(images, &config.image_reveal, RevealPolicy::OneShot, |el, _| {
        add_class(el, LOADED_CLASS);
    })
}
