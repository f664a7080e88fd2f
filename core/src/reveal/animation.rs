//! One-shot animation state machines.
//!
//! Each animation advances tick by tick and emits a [`Patch`] describing the
//! single DOM mutation for that tick. The caller owns the clock: it awaits
//! the kind's cadence between ticks and stops as soon as a step reports
//! `done`. Finished animations return `None` forever, so a stray timer
//! firing late is harmless.

use folio_types::RevealSettings;

use super::directive::Directive;

/// A DOM mutation the frontend applies verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// Replace the element's text content.
    SetText(String),
    /// Set the element's fill width, in percent.
    SetBarWidth(u8),
    /// Flip the element's revealed flag; the stylesheet animates the rest.
    Reveal,
}

/// Result of one animation tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub patch: Patch,
    /// True on the final tick. No further steps follow.
    pub done: bool,
}

/// Runtime state for a single watchable's animation.
#[derive(Debug, Clone)]
pub enum Animation {
    Counter(CounterAnim),
    Typed(TypedAnim),
    Progress(ProgressAnim),
    Fade(FadeAnim),
}

impl Animation {
    pub fn new(directive: Directive, settings: &RevealSettings) -> Self {
        match directive {
            Directive::Counter { target, suffix } => {
                Animation::Counter(CounterAnim::new(target, suffix, settings.counter_ticks()))
            }
            Directive::Typed { text } => Animation::Typed(TypedAnim::new(text)),
            Directive::Progress { percent } => Animation::Progress(ProgressAnim::new(percent)),
            Directive::Fade => Animation::Fade(FadeAnim::new()),
        }
    }

    /// Advance one tick. Returns `None` once the animation has finished.
    pub fn tick(&mut self) -> Option<Step> {
        match self {
            Animation::Counter(counter) => counter.tick(),
            Animation::Typed(typed) => typed.tick(),
            Animation::Progress(progress) => progress.tick(),
            Animation::Fade(fade) => fade.tick(),
        }
    }

    /// Jump straight to the finished state, returning the final patch.
    ///
    /// Used by the eager fallback when no visibility facility exists.
    /// Returns `None` if the animation already finished.
    pub fn finish(&mut self) -> Option<Patch> {
        match self {
            Animation::Counter(counter) => counter.finish(),
            Animation::Typed(typed) => typed.finish(),
            Animation::Progress(progress) => progress.finish(),
            Animation::Fade(fade) => fade.finish(),
        }
    }

    pub fn is_done(&self) -> bool {
        match self {
            Animation::Counter(counter) => counter.done,
            Animation::Typed(typed) => typed.done,
            Animation::Progress(progress) => progress.applied,
            Animation::Fade(fade) => fade.applied,
        }
    }

    /// Delay between ticks for this kind. Zero means the single patch can be
    /// applied immediately.
    pub fn cadence_ms(&self, settings: &RevealSettings) -> u32 {
        match self {
            Animation::Counter(_) => settings.counter_interval_ms,
            Animation::Typed(_) => settings.type_delay_ms,
            Animation::Progress(_) | Animation::Fade(_) => 0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Counter
// ─────────────────────────────────────────────────────────────────────────────

/// Counts up from zero in fixed integer steps.
///
/// The step is `ceil(target / ticks)`, so the displayed value strictly
/// increases and lands on the target exactly. No float accumulation, no
/// overshoot to clamp away on the last frame.
#[derive(Debug, Clone)]
pub struct CounterAnim {
    target: u64,
    suffix: Option<String>,
    step: u64,
    current: u64,
    done: bool,
}

impl CounterAnim {
    fn new(target: u64, suffix: Option<String>, ticks: u32) -> Self {
        let step = target.div_ceil(u64::from(ticks.max(1))).max(1);
        Self {
            target,
            suffix,
            step,
            current: 0,
            done: false,
        }
    }

    fn tick(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }
        self.current = self.current.saturating_add(self.step).min(self.target);
        self.done = self.current == self.target;
        Some(Step {
            patch: Patch::SetText(self.render()),
            done: self.done,
        })
    }

    fn finish(&mut self) -> Option<Patch> {
        if self.done {
            return None;
        }
        self.current = self.target;
        self.done = true;
        Some(Patch::SetText(self.render()))
    }

    // Intermediate ticks show the bare number; only the final value carries
    // the suffix.
    fn render(&self) -> String {
        match &self.suffix {
            Some(suffix) if self.current == self.target => format!("{}{suffix}", self.current),
            _ => self.current.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Typed text
// ─────────────────────────────────────────────────────────────────────────────

/// Reveals a string one character per tick.
///
/// The cursor advances along char boundaries, so every emitted state is a
/// valid UTF-8 prefix of the original string.
#[derive(Debug, Clone)]
pub struct TypedAnim {
    text: String,
    cursor: usize,
    done: bool,
}

impl TypedAnim {
    fn new(text: String) -> Self {
        Self {
            text,
            cursor: 0,
            done: false,
        }
    }

    fn tick(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
        self.done = self.cursor >= self.text.len();
        Some(Step {
            patch: Patch::SetText(self.text[..self.cursor].to_string()),
            done: self.done,
        })
    }

    fn finish(&mut self) -> Option<Patch> {
        if self.done {
            return None;
        }
        self.cursor = self.text.len();
        self.done = true;
        Some(Patch::SetText(self.text.clone()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Progress bar and fade
// ─────────────────────────────────────────────────────────────────────────────

/// Sets the bar width once; the stylesheet's transition does the easing.
#[derive(Debug, Clone)]
pub struct ProgressAnim {
    percent: u8,
    applied: bool,
}

impl ProgressAnim {
    fn new(percent: u8) -> Self {
        Self {
            percent,
            applied: false,
        }
    }

    fn tick(&mut self) -> Option<Step> {
        self.finish().map(|patch| Step { patch, done: true })
    }

    fn finish(&mut self) -> Option<Patch> {
        if self.applied {
            return None;
        }
        self.applied = true;
        Some(Patch::SetBarWidth(self.percent))
    }
}

/// Flips the revealed flag once.
#[derive(Debug, Clone)]
pub struct FadeAnim {
    applied: bool,
}

impl FadeAnim {
    fn new() -> Self {
        Self { applied: false }
    }

    fn tick(&mut self) -> Option<Step> {
        self.finish().map(|patch| Step { patch, done: true })
    }

    fn finish(&mut self) -> Option<Patch> {
        if self.applied {
            return None;
        }
        self.applied = true;
        Some(Patch::Reveal)
    }
}
