//! # page-enhancer
//!
//! WASM presentation layer for a static informational page. Adds theme
//! switching, scroll-driven reveals, an animated statistics counter, a shared
//! modal dialog, and a random fact generator on top of server-free markup.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Tunable thresholds, delays, and keys with JSON overrides |
//! | [`error`] | Setup error type; logged, never surfaced to the reader |
//! | [`theme`] | Light/dark preference and its persistence contract |
//! | [`reveal`] | Viewport-intersection reveal state machine |
//! | [`counter`] | Counter target resolution and tick sequence |
//! | [`modal`] | Shared dialog state and close triggers |
//! | [`facts`] | Fixed fact set and uniform picker |
//! | [`scroll`] | Progress bar, back-to-top, section keys, debounce |
//! | `dom` | Browser bindings for each behavior (`hydrate` only) |
//! | `enhancer` | Composition root and wasm start hook (`hydrate` only) |
//!
//! Everything outside `dom` and `enhancer` is browser-free so it can be
//! unit tested natively.

pub mod config;
pub mod counter;
pub mod error;
pub mod facts;
pub mod modal;
pub mod reveal;
pub mod scroll;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod enhancer;
