//! One-shot reveal animations
//!
//! This module provides:
//! - **Directives**: Parsed animation annotations (counter, typed, progress, fade)
//! - **Animations**: Per-kind state machines that emit patches tick by tick
//! - **Dispatcher**: Registry that fires each watchable at most once
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Directive (markup attribute)                  │
//! │  data-reveal="counter" data-reveal-value="250" ...-suffix="+"   │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                          register()
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Watchable (one-shot trigger state)             │
//! │  "Counter to 250+, not yet fired, waiting for visibility"       │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                 on_visibility(ratio ≥ threshold)
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Animation ticks → Patch stream                   │
//! │  "0" → "2" → "4" → ... → "250+"  (then done, no more ticks)     │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                       Frontend driver (DOM)
//! ```

mod animation;
mod directive;
pub mod dispatcher;

#[cfg(test)]
mod dispatcher_tests;

pub use animation::{Animation, Patch, Step};
pub use directive::{Directive, DirectiveError, KIND_ATTR, RevealKind, SUFFIX_ATTR, VALUE_ATTR};
pub use dispatcher::{RevealDispatcher, TriggerOutcome, WatchId};
