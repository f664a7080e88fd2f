//! Animation directives and their attribute grammar.
//!
//! Markup opts into a reveal animation with a `data-reveal` attribute naming
//! the kind, plus a `data-reveal-value` payload for the kinds that take one:
//!
//! ```text
//! data-reveal="counter"  data-reveal-value="250"  data-reveal-suffix="+"
//! data-reveal="typed"    data-reveal-value="Systems Programmer"
//! data-reveal="progress" data-reveal-value="75"
//! data-reveal="fade"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// Attribute naming the animation kind.
pub const KIND_ATTR: &str = "data-reveal";
/// Attribute carrying the kind's payload (counter target, typed text, percent).
pub const VALUE_ATTR: &str = "data-reveal-value";
/// Attribute carrying an optional literal appended to a counter's final value.
pub const SUFFIX_ATTR: &str = "data-reveal-suffix";

/// The animation vocabulary understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealKind {
    /// Integer counts up from zero to a target.
    Counter,
    /// Text appears one character at a time.
    Typed,
    /// Bar fill jumps to a target percentage.
    Progress,
    /// Presentation flag flips once; the stylesheet animates the rest.
    Fade,
}

impl RevealKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealKind::Counter => "counter",
            RevealKind::Typed => "typed",
            RevealKind::Progress => "progress",
            RevealKind::Fade => "fade",
        }
    }

    /// Parse an attribute value. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "counter" => Some(RevealKind::Counter),
            "typed" => Some(RevealKind::Typed),
            "progress" => Some(RevealKind::Progress),
            "fade" => Some(RevealKind::Fade),
            _ => None,
        }
    }
}

impl fmt::Display for RevealKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a directive could not be built from its attributes.
#[derive(Debug, Error)]
pub enum DirectiveError {
    #[error("unknown reveal kind `{kind}`")]
    UnknownKind { kind: String },
    #[error("`{kind}` directive is missing its data-reveal-value payload")]
    MissingPayload { kind: RevealKind },
    #[error("invalid counter target `{value}`")]
    InvalidTarget {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid progress percent `{value}`")]
    InvalidPercent {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("progress percent {percent} is out of range (0-100)")]
    PercentOutOfRange { percent: u32 },
}

/// A fully parsed animation annotation, ready to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Counter { target: u64, suffix: Option<String> },
    Typed { text: String },
    Progress { percent: u8 },
    Fade,
}

impl Directive {
    pub fn kind(&self) -> RevealKind {
        match self {
            Directive::Counter { .. } => RevealKind::Counter,
            Directive::Typed { .. } => RevealKind::Typed,
            Directive::Progress { .. } => RevealKind::Progress,
            Directive::Fade => RevealKind::Fade,
        }
    }

    /// Build a directive for a known kind from its raw attribute payloads.
    ///
    /// `value` is the `data-reveal-value` attribute when present; `suffix`
    /// is `data-reveal-suffix`. An empty suffix is treated as absent.
    pub fn parse(
        kind: RevealKind,
        value: Option<&str>,
        suffix: Option<&str>,
    ) -> Result<Self, DirectiveError> {
        match kind {
            RevealKind::Counter => {
                let raw = value.ok_or(DirectiveError::MissingPayload { kind })?;
                let target =
                    raw.trim()
                        .parse::<u64>()
                        .map_err(|source| DirectiveError::InvalidTarget {
                            value: raw.to_string(),
                            source,
                        })?;
                let suffix = suffix
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string);
                Ok(Directive::Counter { target, suffix })
            }
            RevealKind::Typed => {
                let text = value.ok_or(DirectiveError::MissingPayload { kind })?;
                Ok(Directive::Typed {
                    text: text.to_string(),
                })
            }
            RevealKind::Progress => {
                let raw = value.ok_or(DirectiveError::MissingPayload { kind })?;
                let percent =
                    raw.trim()
                        .parse::<u32>()
                        .map_err(|source| DirectiveError::InvalidPercent {
                            value: raw.to_string(),
                            source,
                        })?;
                if percent > 100 {
                    return Err(DirectiveError::PercentOutOfRange { percent });
                }
                Ok(Directive::Progress {
                    percent: percent as u8,
                })
            }
            RevealKind::Fade => Ok(Directive::Fade),
        }
    }

    /// Build a directive straight from attribute strings, resolving the kind
    /// first. This is the entry point the frontend scan uses.
    pub fn from_attrs(
        kind: &str,
        value: Option<&str>,
        suffix: Option<&str>,
    ) -> Result<Self, DirectiveError> {
        let kind = RevealKind::parse(kind).ok_or_else(|| DirectiveError::UnknownKind {
            kind: kind.to_string(),
        })?;
        Self::parse(kind, value, suffix)
    }
}
