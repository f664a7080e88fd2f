//! Folio core
//!
//! Platform-agnostic behavior for the portfolio site: the reveal dispatcher
//! and its one-shot animation strategies, site content loading, contact-form
//! validation, the testimonial slider, and the theme flag.
//!
//! Nothing in this crate touches the DOM. The frontend owns scheduling and
//! element access; this crate consumes visibility reports and emits patches
//! for the frontend to apply.

pub mod contact;
pub mod content;
pub mod reveal;
pub mod slider;
pub mod theme;

// Re-exports for convenience
pub use contact::{ContactField, ContactSubmission, FieldError, is_valid_email};
pub use content::{ContentError, load_site_content};
pub use reveal::{
    Directive, DirectiveError, Patch, RevealDispatcher, RevealKind, Step, TriggerOutcome, WatchId,
};
pub use slider::SliderState;
pub use theme::Theme;
