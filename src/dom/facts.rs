//! Floating "random fact" button and the live-region announcer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::modal::ModalController;
use super::{body, listen, set_style};
use crate::config::EnhancerConfig;
use crate::error::EnhanceError;
use crate::facts::FactPicker;

const FACT_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z"/></svg>"#;

const LOADED_ANNOUNCEMENT: &str =
    "Philippines: Bayanihan in the Global Village website loaded successfully. Use Alt+Arrow keys for navigation.";

pub type BrowserFactPicker = FactPicker<SmallRng>;

/// Picker seeded from the browser's entropy-backed `Math.random` and clock.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn browser_picker() -> BrowserFactPicker {
    let seed = (js_sys::Math::random() * (u64::MAX as f64)) as u64 ^ js_sys::Date::now() as u64;
    FactPicker::new(SmallRng::seed_from_u64(seed))
}

/// Append the fact button unless the page already has one.
pub fn setup_button(
    document: &Document,
    picker: &Rc<RefCell<BrowserFactPicker>>,
    modal: &Rc<RefCell<ModalController>>,
) -> Result<(), EnhanceError> {
    if document.query_selector(".fact-generator")?.is_some() {
        log::debug!("page provides its own fact button");
        return Ok(());
    }
    let button: HtmlElement = document.create_element("button")?.unchecked_into();
    button.set_class_name("fact-generator theme-toggle");
    button.set_inner_html(FACT_ICON);
    button.set_attribute("aria-label", "Get random cultural fact")?;

    let picker = Rc::clone(picker);
    let modal = Rc::clone(modal);
    listen(&button, "click", move |_| {
        let fact = picker.borrow_mut().present(&mut *modal.borrow_mut());
        log::debug!("presented fact: {}", fact.title);
    })?;
    body(document)?.append_child(&button)?;
    Ok(())
}

/// Visually hidden `aria-live` region announcing page readiness.
pub fn setup_announcer(document: &Document, config: &EnhancerConfig) -> Result<(), EnhanceError> {
    let announcer: HtmlElement = document.create_element("div")?.unchecked_into();
    announcer.set_attribute("aria-live", "polite")?;
    announcer.set_attribute("aria-atomic", "true")?;
    set_style(&announcer, "position", "absolute");
    set_style(&announcer, "left", "-10000px");
    set_style(&announcer, "width", "1px");
    set_style(&announcer, "height", "1px");
    set_style(&announcer, "overflow", "hidden");
    body(document)?.append_child(&announcer)?;

    Timeout::new(config.announce_delay_ms, move || {
        announcer.set_text_content(Some(LOADED_ANNOUNCEMENT));
    })
    .forget();
    Ok(())
}
