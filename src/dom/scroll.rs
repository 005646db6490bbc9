//! Scroll-driven chrome: back-to-top, reading progress, section shortcuts,
//! and the debounced scroll hook.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

use super::{body, listen, query_one, set_style, window};
use crate::config::EnhancerConfig;
use crate::error::EnhanceError;
use crate::scroll::{Debouncer, back_to_top_visible, progress_percent, section_for_key};

pub fn setup_back_to_top(document: &Document, config: &EnhancerConfig) -> Result<(), EnhanceError> {
    let button: HtmlElement = query_one(document, ".back-to-top")?;
    let win = window()?;

    listen(&button, "click", |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    })?;

    let offset_px = config.back_to_top_offset_px;
    let update = move || {
        let y = web_sys::window().map_or(0.0, |w| scroll_y(&w));
        let classes = button.class_list();
        let result = if back_to_top_visible(y, offset_px) {
            classes.add_1("visible")
        } else {
            classes.remove_1("visible")
        };
        if let Err(err) = result {
            log::debug!("back-to-top toggle failed: {err:?}");
        }
    };
    update();
    listen(&win, "scroll", move |_| update())
}

pub fn setup_reading_progress(document: &Document) -> Result<(), EnhanceError> {
    let bar: HtmlElement = document.create_element("div")?.unchecked_into();
    bar.set_class_name("reading-progress");
    body(document)?.append_child(&bar)?;

    let update = move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let viewport = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |el| f64::from(el.scroll_height()));
        let pct = progress_percent(scroll_y(&window), document_height, viewport);
        set_style(&bar, "width", &format!("{pct}%"));
    };
    update();
    let win = window()?;
    listen(&win, "scroll", move |_| update())
}

/// Alt+ArrowUp / Alt+ArrowDown jump to the `#home` / `#profile` sections.
pub fn setup_keyboard_navigation(document: &Document) -> Result<(), EnhanceError> {
    listen(document, "keydown", |ev| {
        let Some(key_event) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let Some(section_id) = section_for_key(key_event.alt_key(), &key_event.key()) else {
            return;
        };
        ev.prevent_default();
        scroll_to_section(section_id);
    })
}

pub fn scroll_to_section(section_id: &str) {
    let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section_id))
    else {
        log::debug!("no section #{section_id}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Coalesce scroll bursts; the deferred work runs after `debounce_ms` of quiet.
pub fn setup_debounced_scroll(config: &EnhancerConfig) -> Result<(), EnhanceError> {
    let debounce_ms = config.debounce_ms;
    let debouncer = Rc::new(RefCell::new(Debouncer::new()));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let win = window()?;
    listen(&win, "scroll", move |_| {
        let ticket = debouncer.borrow_mut().trigger();
        let debouncer = Rc::clone(&debouncer);
        let timeout = Timeout::new(debounce_ms, move || {
            if debouncer.borrow_mut().settle(ticket) {
                on_scroll_settled();
            }
        });
        // Replacing the slot drops, and so cancels, the superseded timer.
        let superseded = pending.borrow_mut().replace(timeout);
        drop(superseded);
    })
}

fn on_scroll_settled() {
    let y = web_sys::window().map_or(0.0, |w| scroll_y(&w));
    log::trace!("scroll settled at {y}");
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
