//! Browser bindings for the enhancer behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule wires one behavior from the browser-free modules to the
//! page. Setup functions look up their page anchors and return
//! [`EnhanceError::MissingAnchor`] when the markup opts out; the composition
//! root logs and moves on. Event closures live for the page lifetime.

pub mod cards;
pub mod counter;
pub mod facts;
pub mod modal;
pub mod observer;
pub mod reveal;
pub mod scroll;
pub mod theme;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, EventTarget, HtmlElement, Window};

use crate::error::EnhanceError;

pub fn window() -> Result<Window, EnhanceError> {
    web_sys::window().ok_or(EnhanceError::NoWindow)
}

pub fn document() -> Result<Document, EnhanceError> {
    window()?.document().ok_or(EnhanceError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement, EnhanceError> {
    document.body().ok_or(EnhanceError::MissingAnchor("body"))
}

/// First element matching `selector`, or `MissingAnchor`.
pub fn query_one<T: JsCast>(document: &Document, selector: &'static str) -> Result<T, EnhanceError> {
    document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(EnhanceError::MissingAnchor(selector))
}

/// All elements matching `selector` that cast to `T`.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, EnhanceError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Attach a page-lifetime event listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), EnhanceError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Set an inline style property; failures are logged and otherwise ignored.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::debug!("failed to set style {property}: {err:?}");
    }
}

pub fn clear_style(el: &HtmlElement, property: &str) {
    if let Err(err) = el.style().remove_property(property) {
        log::debug!("failed to clear style {property}: {err:?}");
    }
}

pub fn add_class(el: &web_sys::Element, class: &str) {
    if let Err(err) = el.class_list().add_1(class) {
        log::debug!("failed to add class {class}: {err:?}");
    }
}
