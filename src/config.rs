//! Enhancer configuration with page-level JSON overrides.
//!
//! Defaults match the stock page. A page may embed
//! `<script type="application/json" id="enhancer-config">` with any subset of
//! fields; absent fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::EnhanceError;
use crate::reveal::{Margin, ObserverOptions};

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_THEME_TRANSITION_MS: u32 = 300;
pub const DEFAULT_BACK_TO_TOP_OFFSET_PX: f64 = 300.0;
pub const DEFAULT_DEBOUNCE_MS: u32 = 10;
pub const DEFAULT_COUNTER_DURATION_MS: f64 = 2000.0;
pub const DEFAULT_COUNTER_TICK_MS: u32 = 16;
pub const DEFAULT_CARD_PULSE_MS: u32 = 200;
pub const DEFAULT_ANNOUNCE_DELAY_MS: u32 = 1000;

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "enhancer-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    pub storage_key: String,
    pub theme_transition_ms: u32,
    pub back_to_top_offset_px: f64,
    pub debounce_ms: u32,
    pub counter_duration_ms: f64,
    pub counter_tick_ms: u32,
    pub card_pulse_ms: u32,
    pub announce_delay_ms: u32,
    pub log_level: String,
    pub scroll_reveal: ObserverOptions,
    pub timeline_reveal: ObserverOptions,
    pub counter_reveal: ObserverOptions,
    pub image_reveal: ObserverOptions,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            theme_transition_ms: DEFAULT_THEME_TRANSITION_MS,
            back_to_top_offset_px: DEFAULT_BACK_TO_TOP_OFFSET_PX,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            counter_tick_ms: DEFAULT_COUNTER_TICK_MS,
            card_pulse_ms: DEFAULT_CARD_PULSE_MS,
            announce_delay_ms: DEFAULT_ANNOUNCE_DELAY_MS,
            log_level: "info".to_owned(),
            scroll_reveal: ObserverOptions::new(0.1, Margin { bottom: -50.0, ..Margin::default() }),
            timeline_reveal: ObserverOptions::new(0.3, Margin::default()),
            counter_reveal: ObserverOptions::new(0.5, Margin::default()),
            image_reveal: ObserverOptions::new(0.0, Margin::default()),
        }
    }
}

impl EnhancerConfig {
    /// Parse a (possibly partial) JSON override document.
    pub fn from_json(raw: &str) -> Result<Self, EnhanceError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.normalize();
        Ok(config)
    }

    /// Read overrides from the page, falling back to defaults.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default enhancer config");
                Self::default()
            }
        }
    }

    /// Parsed `log_level`, defaulting to `Info` for unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    fn normalize(&mut self) {
        self.counter_tick_ms = self.counter_tick_ms.max(1);
        if !self.counter_duration_ms.is_finite() || self.counter_duration_ms <= 0.0 {
            self.counter_duration_ms = DEFAULT_COUNTER_DURATION_MS;
        }
        if self.storage_key.trim().is_empty() {
            self.storage_key = DEFAULT_STORAGE_KEY.to_owned();
        }
        for options in [
            &mut self.scroll_reveal,
            &mut self.timeline_reveal,
            &mut self.counter_reveal,
            &mut self.image_reveal,
        ] {
            *options = ObserverOptions::new(options.threshold, options.root_margin);
        }
    }
}
