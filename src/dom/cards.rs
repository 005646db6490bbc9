//! Card hover lift and click pulse.

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use super::{listen, query_all, set_style};
use crate::config::EnhancerConfig;
use crate::error::EnhanceError;
use crate::scroll::{CARD_HOVER_TRANSFORM, CARD_PULSE_RESET_TRANSFORM, CARD_PULSE_TRANSFORM, CARD_REST_TRANSFORM};

pub fn setup(document: &Document, config: &EnhancerConfig) -> Result<(), EnhanceError> {
    let cards: Vec<HtmlElement> = query_all(document, ".card")?;
    if cards.is_empty() {
        return Err(EnhanceError::MissingAnchor(".card"));
    }

    let pulse_ms = config.card_pulse_ms;
    for card in cards {
        set_style(&card, "cursor", "pointer");

        let hovered = card.clone();
        listen(&card, "mouseenter", move |_| set_style(&hovered, "transform", CARD_HOVER_TRANSFORM))?;
        let left = card.clone();
        listen(&card, "mouseleave", move |_| set_style(&left, "transform", CARD_REST_TRANSFORM))?;

        let clicked = card.clone();
        listen(&card, "click", move |_| {
            // Cards wrapping a link navigate instead of pulsing.
            if matches!(clicked.query_selector("a"), Ok(Some(_))) {
                return;
            }
            set_style(&clicked, "transform", CARD_PULSE_TRANSFORM);
            let settled = clicked.clone();
            Timeout::new(pulse_ms, move || set_style(&settled, "transform", CARD_PULSE_RESET_TRANSFORM)).forget();
        })?;
    }
    Ok(())
}
