//! `.stat-number` counters driven by a tick interval once visible.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Document, Element};

use super::{add_class, observer, query_all};
use crate::config::EnhancerConfig;
use crate::counter::{COUNT_ATTRIBUTE, CounterTask, STARTED_CLASS, TARGET_ATTRIBUTE, format_count, resolve_target};
use crate::error::EnhanceError;
use crate::reveal::RevealPolicy;

pub fn setup(document: &Document, config: &EnhancerConfig) -> Result<(), EnhanceError> {
    let counters: Vec<Element> = query_all(document, ".stat-number")?;
    if counters.is_empty() {
        return Err(EnhanceError::MissingAnchor(".stat-number"));
    }

    let duration_ms = config.counter_duration_ms;
    let tick_ms = config.counter_tick_ms;
    observer::watch(counters, &config.counter_reveal, RevealPolicy::OneShot, move |el, _| {
        if el.class_list().contains(STARTED_CLASS) {
            return;
        }
        add_class(el, STARTED_CLASS);
        start(el.clone(), duration_ms, tick_ms);
    })
}

/// Resolve the element's target and animate its text up to it.
fn start(el: Element, duration_ms: f64, tick_ms: u32) {
    let target = resolve_target(
        el.get_attribute(COUNT_ATTRIBUTE).as_deref(),
        el.get_attribute(TARGET_ATTRIBUTE).as_deref(),
        &el.text_content().unwrap_or_default(),
    );
    log::debug!("counter started: target={target}");

    let mut task = CounterTask::new(target, duration_ms, tick_ms);
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot_for_tick = Rc::clone(&slot);
    let tick = Interval::new(tick_ms, move || {
        if let Some(value) = task.next() {
            el.set_text_content(Some(&render_count(value)));
        }
        if task.is_done() {
            let finished = slot_for_tick.borrow_mut().take();
            drop(finished);
        }
    });
    *slot.borrow_mut() = Some(tick);
}

/// Format `value` in the visitor's locale, falling back to en-US grouping.
#[allow(clippy::cast_precision_loss)]
fn render_count(value: u64) -> String {
    let Some(locale) = web_sys::window().and_then(|w| w.navigator().language()) else {
        return format_count(value);
    };
    js_sys::Number::from(value as f64)
        .to_locale_string(&locale)
        .as_string()
        .unwrap_or_else(|| format_count(value))
}
