//! `IntersectionObserver` wiring for [`Revealable`] elements.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::EnhanceError;
use crate::reveal::{Intersection, ObserverOptions, RevealOutcome, RevealPolicy, Revealable};

/// Watch `elements` and call `on_reveal` for every reveal or re-fire.
///
/// One-shot watches unobserve each element after its first reveal.
pub fn watch<F>(
    elements: Vec<Element>,
    options: &ObserverOptions,
    policy: RevealPolicy,
    on_reveal: F,
) -> Result<(), EnhanceError>
where
    F: Fn(&Element, RevealOutcome) + 'static,
{
    if elements.is_empty() {
        return Ok(());
    }

    let tracked: Rc<RefCell<Vec<(Element, Revealable)>>> = Rc::new(RefCell::new(
        elements
            .iter()
            .map(|el| (el.clone(), Revealable::new(policy, options)))
            .collect(),
    ));

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let outcome = {
                    let mut tracked = tracked.borrow_mut();
                    let Some((_, state)) = tracked.iter_mut().find(|(el, _)| *el == target) else {
                        continue;
                    };
                    state.on_intersection(Intersection {
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    })
                };
                match outcome {
                    RevealOutcome::Ignored => {}
                    RevealOutcome::Revealed { unobserve } => {
                        if unobserve {
                            observer.unobserve(&target);
                        }
                        on_reveal(&target, outcome);
                    }
                    RevealOutcome::Refired => on_reveal(&target, outcome),
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin.to_css());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for el in &elements {
        observer.observe(el);
    }
    log::debug!("watching {} elements ({policy:?})", elements.len());
    Ok(())
}
