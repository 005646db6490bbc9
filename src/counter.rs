//! Statistics counter: target resolution and tick sequence.
//!
//! A counter climbs from zero to its target over a fixed duration, one step
//! per timer tick. [`CounterTask`] is the lazy sequence of rendered values;
//! the browser binding only drives it from an interval and writes each value.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Primary explicit target attribute.
pub const COUNT_ATTRIBUTE: &str = "data-count";
/// Fallback explicit target attribute.
pub const TARGET_ATTRIBUTE: &str = "data-target";
/// Class marking a counter that has already started.
pub const STARTED_CLASS: &str = "animated";

/// Keyword → target pairs, checked in order against lowercased text.
const KEYWORD_TARGETS: &[(&str, u64)] = &[
    ("%", 90),
    ("million", 50),
    ("billion", 30),
    ("island", 7600),
    ("language", 180),
];
const FALLBACK_TARGET: u64 = 100;

/// Upper bound on ticks so a pathological duration cannot stall the step.
const MAX_TICKS: f64 = 1_000_000.0;

/// Resolve the counter target for an element.
///
/// Order: numeric `data-count`, then numeric `data-target`, then the keyword
/// heuristic over the element text.
#[must_use]
pub fn resolve_target(count_attr: Option<&str>, target_attr: Option<&str>, text: &str) -> u64 {
    count_attr
        .and_then(parse_leading_int)
        .or_else(|| target_attr.and_then(parse_leading_int))
        .unwrap_or_else(|| target_from_text(text))
}

/// Keyword heuristic for counters without an explicit target.
#[must_use]
pub fn target_from_text(text: &str) -> u64 {
    let text = text.to_lowercase();
    KEYWORD_TARGETS
        .iter()
        .find(|(keyword, _)| text.contains(*keyword))
        .map_or(FALLBACK_TARGET, |&(_, target)| target)
}

/// Leading non-negative integer, ignoring leading whitespace and any
/// trailing garbage (`"12abc"` → 12). Negative or digit-less input is `None`;
/// digits past `u64::MAX` saturate rather than fall through.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }
    Some(unsigned[..end].parse().unwrap_or(u64::MAX))
}

/// Group thousands with commas, en-US style. The browser renders through the
/// visitor's locale and uses this only when the locale is unavailable.
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One running counter animation.
///
/// Yields the floored value for each tick and finishes after yielding the
/// target exactly. Values never decrease and never exceed the target.
#[derive(Clone, Debug)]
pub struct CounterTask {
    target: u64,
    current: f64,
    step: f64,
    done: bool,
}

impl CounterTask {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: u64, duration_ms: f64, tick_ms: u32) -> Self {
        let ticks = (duration_ms / f64::from(tick_ms.max(1))).clamp(1.0, MAX_TICKS);
        Self { target, current: 0.0, step: target as f64 / ticks, done: false }
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Iterator for CounterTask {
    type Item = u64;

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        self.current += self.step;
        if self.current >= self.target as f64 {
            self.done = true;
            return Some(self.target);
        }
        Some((self.current.floor() as u64).min(self.target))
    }
}
