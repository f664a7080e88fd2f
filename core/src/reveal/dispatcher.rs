//! Reveal dispatch handler
//!
//! Holds the registry of watchables and enforces the one-shot contract:
//! each registered directive fires its animation at most once, no matter
//! how often visibility toggles or how late a stale report arrives.

use folio_types::RevealSettings;
use hashbrown::HashMap;

use super::animation::{Animation, Patch, Step};
use super::directive::{Directive, RevealKind};

/// Opaque handle tying a registered directive to its host element.
///
/// The frontend stamps this onto the element so observer callbacks can find
/// their way back to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatchId(u64);

impl WatchId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Rebuild a handle from its stamped form. Reports for ids that were
    /// never registered (or already released) are ignored.
    pub fn from_u64(raw: u64) -> Self {
        WatchId(raw)
    }
}

/// Outcome of a visibility report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The watchable crossed the threshold; start ticking its animation and
    /// stop observing the element.
    Triggered,
    /// Nothing to do: unknown id, below threshold, not intersecting, or the
    /// watchable already fired.
    Ignored,
}

/// One registered directive and its one-shot trigger state.
#[derive(Debug, Clone)]
struct Watchable {
    kind: RevealKind,
    animation: Animation,
    triggered: bool,
}

/// Registry of pending and running reveal animations.
#[derive(Debug, Clone)]
pub struct RevealDispatcher {
    settings: RevealSettings,
    watchables: HashMap<WatchId, Watchable>,
    next_id: u64,
}

impl RevealDispatcher {
    pub fn new(settings: RevealSettings) -> Self {
        Self {
            settings,
            watchables: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn settings(&self) -> &RevealSettings {
        &self.settings
    }

    /// Visibility ratio a watchable must reach before it fires.
    pub fn threshold(&self) -> f64 {
        self.settings.threshold
    }

    pub fn len(&self) -> usize {
        self.watchables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watchables.is_empty()
    }

    /// Add a directive to the registry and hand back its watch handle.
    pub fn register(&mut self, directive: Directive) -> WatchId {
        let id = WatchId(self.next_id);
        self.next_id += 1;
        let kind = directive.kind();
        let animation = Animation::new(directive, &self.settings);
        self.watchables.insert(
            id,
            Watchable {
                kind,
                animation,
                triggered: false,
            },
        );
        id
    }

    /// Feed one visibility report into the registry.
    ///
    /// Fires the watchable's animation when it is intersecting at or above
    /// the threshold and has not fired before. Every other combination is
    /// ignored, including reports for ids that were released or never
    /// existed; a late observer callback must never panic.
    pub fn on_visibility(&mut self, id: WatchId, intersecting: bool, ratio: f64) -> TriggerOutcome {
        let Some(watchable) = self.watchables.get_mut(&id) else {
            return TriggerOutcome::Ignored;
        };
        if watchable.triggered {
            return TriggerOutcome::Ignored;
        }
        if !intersecting || ratio < self.settings.threshold {
            return TriggerOutcome::Ignored;
        }
        watchable.triggered = true;
        tracing::debug!(id = id.0, kind = %watchable.kind, "reveal triggered");
        TriggerOutcome::Triggered
    }

    /// Advance a triggered watchable's animation by one tick.
    ///
    /// Returns `None` for untriggered, finished, or released watchables, so
    /// a timer that outlives its element simply drains away.
    pub fn tick(&mut self, id: WatchId) -> Option<Step> {
        let watchable = self.watchables.get_mut(&id)?;
        if !watchable.triggered {
            return None;
        }
        watchable.animation.tick()
    }

    /// Delay between ticks for a watchable's kind, if it is still registered.
    pub fn cadence_ms(&self, id: WatchId) -> Option<u32> {
        self.watchables
            .get(&id)
            .map(|watchable| watchable.animation.cadence_ms(&self.settings))
    }

    pub fn is_triggered(&self, id: WatchId) -> bool {
        self.watchables
            .get(&id)
            .is_some_and(|watchable| watchable.triggered)
    }

    /// Eagerly fire every watchable that has not fired yet, returning the
    /// final patch for each.
    ///
    /// Fallback path for hosts without a visibility facility: the page
    /// renders fully revealed instead of fully hidden.
    pub fn trigger_all(&mut self) -> Vec<(WatchId, Patch)> {
        let mut patches = Vec::new();
        for (id, watchable) in self.watchables.iter_mut() {
            watchable.triggered = true;
            if let Some(patch) = watchable.animation.finish() {
                patches.push((*id, patch));
            }
        }
        // Stable order for callers; the map iterates arbitrarily.
        patches.sort_by_key(|(id, _)| *id);
        patches
    }

    /// Drop a watchable whose element left the document.
    ///
    /// Safe to call repeatedly; pending ticks for the id become no-ops.
    pub fn release(&mut self, id: WatchId) {
        if self.watchables.remove(&id).is_some() {
            tracing::debug!(id = id.0, "watchable released");
        }
    }
}
