//! Scroll and keyboard helpers: reading progress, back-to-top, section
//! shortcuts, scroll debouncing, and card effect constants.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

pub const CARD_HOVER_TRANSFORM: &str = "translateY(-5px) scale(1.02)";
pub const CARD_REST_TRANSFORM: &str = "translateY(0) scale(1)";
pub const CARD_PULSE_TRANSFORM: &str = "scale(1.05)";
pub const CARD_PULSE_RESET_TRANSFORM: &str = "scale(1)";

pub const TIMELINE_HIDDEN_TRANSFORM: &str = "translateX(-20px)";
pub const TIMELINE_SHOWN_TRANSFORM: &str = "translateX(0)";
pub const TIMELINE_TRANSITION: &str = "all 0.6s ease";

/// Reading progress as a percentage in `[0, 100]`.
///
/// A page that cannot scroll reads as fully read.
#[must_use]
pub fn progress_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 {
        return 100.0;
    }
    let pct = scroll_y / scrollable * 100.0;
    if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) }
}

/// Whether the back-to-top control should be shown.
#[must_use]
pub fn back_to_top_visible(scroll_y: f64, offset_px: f64) -> bool {
    scroll_y > offset_px
}

/// Section id targeted by an Alt+Arrow shortcut.
#[must_use]
pub fn section_for_key(alt: bool, key: &str) -> Option<&'static str> {
    if !alt {
        return None;
    }
    match key {
        "ArrowUp" => Some("home"),
        "ArrowDown" => Some("profile"),
        _ => None,
    }
}

/// Trailing-edge coalescing of a burst of events.
///
/// Each trigger supersedes the previous one; only the latest ticket's timer
/// may run the deferred work. The browser binding pairs this with a
/// replaceable timeout so superseded timers are also cancelled.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: u64,
    fired: u64,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new event and return its ticket.
    pub fn trigger(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Called when the quiet period for `ticket` elapses. Returns `true` when
    /// the deferred work should run.
    pub fn settle(&mut self, ticket: u64) -> bool {
        if ticket != self.generation || self.fired == ticket {
            return false;
        }
        self.fired = ticket;
        true
    }
}
