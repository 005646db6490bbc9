//! Viewport-intersection reveal state.
//!
//! DESIGN
//! ======
//! The browser reports intersection entries; this module decides what each
//! entry means for a tracked element. One-shot reveals stop watching after the
//! first hit. Repeating reveals stay subscribed and re-apply their final
//! presentation on every intersecting entry, including re-entry from below.
//! The timeline behavior relies on the repeating form.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use serde::Deserialize;

/// Pixel offsets applied to the viewport before intersection is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    /// CSS `rootMargin` string, e.g. `"0px 0px -50px 0px"`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("{}px {}px {}px {}px", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    pub root_margin: Margin,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::new(0.0, Margin::default())
    }
}

impl ObserverOptions {
    #[must_use]
    pub fn new(threshold: f64, root_margin: Margin) -> Self {
        let threshold = if threshold.is_finite() { threshold.clamp(0.0, 1.0) } else { 0.0 };
        Self { threshold, root_margin }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPolicy {
    /// Reveal once, then unsubscribe.
    #[default]
    OneShot,
    /// Keep watching; every intersecting entry re-applies the reveal.
    Repeating,
}

/// One intersection report for a watched element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub intersecting: bool,
    pub ratio: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Entry does not qualify, or the element is no longer watched.
    Ignored,
    /// First qualifying entry. `unobserve` tells the caller to stop watching.
    Revealed { unobserve: bool },
    /// Qualifying entry after the first, for repeating reveals.
    Refired,
}

/// Reveal state for one tracked element.
#[derive(Clone, Debug)]
pub struct Revealable {
    policy: RevealPolicy,
    threshold: f64,
    revealed: bool,
    watching: bool,
}

impl Revealable {
    #[must_use]
    pub fn new(policy: RevealPolicy, options: &ObserverOptions) -> Self {
        Self { policy, threshold: options.threshold, revealed: false, watching: true }
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn watching(&self) -> bool {
        self.watching
    }

    /// Feed one intersection entry through the state machine.
    pub fn on_intersection(&mut self, entry: Intersection) -> RevealOutcome {
        if !self.watching || !qualifies(entry, self.threshold) {
            return RevealOutcome::Ignored;
        }
        if self.revealed {
            return RevealOutcome::Refired;
        }
        self.revealed = true;
        let unobserve = self.policy == RevealPolicy::OneShot;
        if unobserve {
            self.watching = false;
        }
        RevealOutcome::Revealed { unobserve }
    }
}

fn qualifies(entry: Intersection, threshold: f64) -> bool {
    // The browser reports `isIntersecting` for edge-adjacent boxes at a zero
    // threshold, where the ratio is also zero.
    entry.intersecting && (threshold <= 0.0 || entry.ratio >= threshold)
}
