//! Composition root and wasm entry points.
//!
//! DESIGN
//! ======
//! [`Enhancer::init`] wires every behavior once, in a fixed order, and keeps
//! the shared dialog and fact picker as owned fields. Behaviors are
//! independent: one failing to set up is logged and the rest still run. The
//! instance lives in a thread-local for the page lifetime; nothing is torn
//! down.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::EnhancerConfig;
use crate::dom::facts::{BrowserFactPicker, browser_picker};
use crate::dom::modal::ModalController;
use crate::dom::{self, cards, counter, reveal, scroll, theme};
use crate::error::EnhanceError;

thread_local! {
    static ENHANCER: RefCell<Option<Enhancer>> = const { RefCell::new(None) };
}

pub struct Enhancer {
    modal: Option<Rc<RefCell<ModalController>>>,
    facts: Rc<RefCell<BrowserFactPicker>>,
}

impl Enhancer {
    /// Register every behavior against `document`.
    pub fn init(document: &Document, config: EnhancerConfig) -> Self {
        report("theme toggle", theme::setup(document, &config));
        report("back to top", scroll::setup_back_to_top(document, &config));
        report("reading progress", scroll::setup_reading_progress(document));
        report("scroll animations", reveal::setup_scroll_animations(document, &config));
        report("card effects", cards::setup(document, &config));

        let modal = match ModalController::mount(document) {
            Ok(modal) => Some(modal),
            Err(err) => {
                report("modal", Err(err));
                None
            }
        };
        if let Some(modal) = &modal {
            report("interactive elements", dom::modal::setup_triggers(document, modal));
        }

        report("statistics counter", counter::setup(document, &config));
        report("timeline", reveal::setup_timeline(document, &config));
        report("keyboard navigation", scroll::setup_keyboard_navigation(document));
        report("image reveal", reveal::setup_image_reveal(document, &config));
        report("scroll debounce", scroll::setup_debounced_scroll(&config));

        let facts = Rc::new(RefCell::new(browser_picker()));
        if let Some(modal) = &modal {
            report("fact button", dom::facts::setup_button(document, &facts, modal));
        }
        report("announcer", dom::facts::setup_announcer(document, &config));

        log::info!("page enhancer ready");
        Self { modal, facts }
    }

    pub fn open_modal(&self, title: &str, body_html: &str) {
        if let Some(modal) = &self.modal {
            modal.borrow_mut().open(title, body_html);
        }
    }

    pub fn close_modal(&self) {
        if let Some(modal) = &self.modal {
            modal.borrow_mut().close();
        }
    }

    #[must_use]
    pub fn modal_open(&self) -> bool {
        self.modal.as_ref().is_some_and(|m| m.borrow().is_open())
    }

    pub fn display_fact(&self) {
        if let Some(modal) = &self.modal {
            self.facts.borrow_mut().present(&mut *modal.borrow_mut());
        }
    }
}

fn report(behavior: &str, result: Result<(), EnhanceError>) {
    match result {
        Ok(()) => log::debug!("{behavior}: ready"),
        Err(err) if err.is_expected() => log::debug!("{behavior}: skipped ({err})"),
        Err(err) => log::warn!("{behavior}: {err}"),
    }
}

fn boot() {
    let Ok(document) = dom::document() else {
        log::warn!("no document; page enhancer disabled");
        return;
    };
    let config = EnhancerConfig::load();
    log::set_max_level(config.log_level().to_level_filter());
    let enhancer = Enhancer::init(&document, config);
    ENHANCER.with(|slot| *slot.borrow_mut() = Some(enhancer));
}

fn with_enhancer(f: impl FnOnce(&Enhancer)) {
    ENHANCER.with(|slot| {
        if let Some(enhancer) = slot.borrow().as_ref() {
            f(enhancer);
        }
    });
}

/// Wasm start hook: install logging, then boot on page-ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        log::debug!("console logger already installed: {err}");
    }

    let Ok(document) = dom::document() else {
        return;
    };
    if document.ready_state() != "loading" {
        boot();
        return;
    }
    if let Err(err) = dom::listen(&document, "DOMContentLoaded", |_| boot()) {
        log::warn!("cannot wait for page-ready: {err}");
    }
}

/// Open the shared dialog from page script.
#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(title: &str, content: &str) {
    with_enhancer(|e| e.open_modal(title, content));
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() {
    with_enhancer(Enhancer::close_modal);
}

#[wasm_bindgen(js_name = isModalOpen)]
pub fn is_modal_open() -> bool {
    let mut open = false;
    with_enhancer(|e| open = e.modal_open());
    open
}

/// Show a random fact in the shared dialog.
#[wasm_bindgen(js_name = displayFact)]
pub fn display_fact() {
    with_enhancer(Enhancer::display_fact);
}
