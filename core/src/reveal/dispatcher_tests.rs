use folio_types::RevealSettings;

use super::animation::{Patch, Step};
use super::directive::Directive;
use super::dispatcher::{RevealDispatcher, TriggerOutcome, WatchId};

fn dispatcher() -> RevealDispatcher {
    RevealDispatcher::new(RevealSettings::default())
}

fn counter_directive(target: u64, suffix: Option<&str>) -> Directive {
    Directive::Counter {
        target,
        suffix: suffix.map(str::to_string),
    }
}

fn typed_directive(text: &str) -> Directive {
    Directive::Typed {
        text: text.to_string(),
    }
}

/// Tick one watchable until it stops emitting steps.
fn drain(dispatcher: &mut RevealDispatcher, id: WatchId) -> Vec<Step> {
    let mut steps = Vec::new();
    while let Some(step) = dispatcher.tick(id) {
        steps.push(step);
    }
    steps
}

fn text_of(step: &Step) -> &str {
    match &step.patch {
        Patch::SetText(text) => text,
        other => panic!("Expected SetText patch, got {other:?}"),
    }
}

#[test]
fn test_fires_once_across_visibility_toggles() {
    let mut dispatcher = dispatcher();
    let id = dispatcher.register(counter_directive(10, None));

    assert_eq!(
        dispatcher.on_visibility(id, true, 0.5),
        TriggerOutcome::Triggered
    );
    assert_eq!(
        dispatcher.on_visibility(id, false, 0.0),
        TriggerOutcome::Ignored,
        "Leaving the viewport must not re-arm the watchable"
    );
    assert_eq!(
        dispatcher.on_visibility(id, true, 0.9),
        TriggerOutcome::Ignored,
        "Re-entering the viewport must not fire a second time"
    );

    let steps = drain(&mut dispatcher, id);
    assert_eq!(text_of(steps.last().unwrap()), "10");
    assert_eq!(
        dispatcher.on_visibility(id, true, 1.0),
        TriggerOutcome::Ignored,
        "A finished watchable stays fired"
    );
}

#[test]
fn test_below_threshold_is_ignored() {
    let mut dispatcher = dispatcher();
    let id = dispatcher.register(counter_directive(10, None));

    assert_eq!(
        dispatcher.on_visibility(id, true, 0.1),
        TriggerOutcome::Ignored
    );
    assert!(!dispatcher.is_triggered(id));
    assert_eq!(
        dispatcher.tick(id),
        None,
        "Untriggered watchables must not tick"
    );
}

#[test]
fn test_not_intersecting_is_ignored_regardless_of_ratio() {
    let mut dispatcher = dispatcher();
    let id = dispatcher.register(counter_directive(10, None));

    assert_eq!(
        dispatcher.on_visibility(id, false, 1.0),
        TriggerOutcome::Ignored
    );
    assert!(!dispatcher.is_triggered(id));
}

#[test]
fn test_ratio_at_threshold_fires() {
    let mut dispatcher = dispatcher();
    let id = dispatcher.register(counter_directive(10, None));

    assert_eq!(
        dispatcher.on_visibility(id, true, dispatcher.threshold()),
        TriggerOutcome::Triggered
    );
}

#[test]
fn test_counter_250_with_plus_suffix() {
    let mut dispatcher = dispatcher();
    let id = dispatcher.register(counter_directive(250, Some("+")));

    assert_eq!(
        dispatcher.on_visibility(id, true, 0.3),
        TriggerOutcome::Triggered
    );
    let steps = drain(&mut dispatcher, id);
    assert_eq!(
        text_of(steps.last().unwrap()),
        "250+",
        "Final text must be the literal target plus suffix"
    );
}

#[test]
fn test_typed_hello_tick_by_tick() {
    let mut dispatcher = dispatcher();
    let id = dispatcher.register(typed_directive("Hello"));
    dispatcher.on_visibility(id, true, 0.5);

    let mut texts = Vec::new();
    for _ in 0..4 {
        texts.push(text_of(&dispatcher.tick(id).unwrap()).to_string());
    }
    assert_eq!(texts.last().unwrap(), "Hell", "After 4 ticks");

    let fifth = dispatcher.tick(id).unwrap();
    assert_eq!(text_of(&fifth), "Hello", "After 5 ticks");
    assert!(fifth.done);
    assert_eq!(dispatcher.tick(id), None, "No sixth tick");
}

#[test]
fn test_progress_width_set_exactly_once() {
    let mut dispatcher = dispatcher();
    let id = dispatcher.register(Directive::Progress { percent: 75 });

    dispatcher.on_visibility(id, true, 0.5);
    let step = dispatcher.tick(id).expect("first tick sets the width");
    assert_eq!(step.patch, Patch::SetBarWidth(75));
    assert!(step.done);

    assert_eq!(
        dispatcher.on_visibility(id, true, 0.8),
        TriggerOutcome::Ignored
    );
    assert_eq!(dispatcher.tick(id), None, "Width must not be set again");
}

#[test]
fn test_unknown_id_report_is_ignored() {
    let mut dispatcher = dispatcher();
    assert_eq!(
        dispatcher.on_visibility(WatchId::from_u64(999), true, 1.0),
        TriggerOutcome::Ignored
    );
    assert_eq!(dispatcher.tick(WatchId::from_u64(999)), None);
}

#[test]
fn test_release_before_first_tick() {
    let mut dispatcher = dispatcher();
    let id = dispatcher.register(counter_directive(100, None));
    dispatcher.on_visibility(id, true, 0.5);

    // Element detached between trigger and first scheduled tick.
    dispatcher.release(id);
    assert_eq!(dispatcher.tick(id), None, "Released watchable must not tick");
    assert_eq!(
        dispatcher.on_visibility(id, true, 1.0),
        TriggerOutcome::Ignored,
        "Stale observer callback after release is ignored"
    );
}

#[test]
fn test_release_is_idempotent() {
    let mut dispatcher = dispatcher();
    let id = dispatcher.register(Directive::Fade);
    dispatcher.release(id);
    dispatcher.release(id);
    assert!(dispatcher.is_empty());
}

#[test]
fn test_release_mid_animation_stops_ticks() {
    let mut dispatcher = dispatcher();
    let id = dispatcher.register(typed_directive("Hello"));
    dispatcher.on_visibility(id, true, 0.5);

    dispatcher.tick(id);
    dispatcher.tick(id);
    dispatcher.release(id);
    assert_eq!(dispatcher.tick(id), None);
}

#[test]
fn test_watchables_do_not_interfere() {
    let mut dispatcher = dispatcher();
    let first = dispatcher.register(counter_directive(4, None));
    let second = dispatcher.register(counter_directive(7, None));

    dispatcher.on_visibility(first, true, 0.5);
    let first_steps = drain(&mut dispatcher, first);
    assert_eq!(text_of(first_steps.last().unwrap()), "4");

    assert!(
        !dispatcher.is_triggered(second),
        "Untouched watchable must stay pending"
    );
    dispatcher.on_visibility(second, true, 0.5);
    let second_steps = drain(&mut dispatcher, second);
    assert_eq!(text_of(second_steps.last().unwrap()), "7");
}

#[test]
fn test_trigger_all_applies_final_states() {
    let mut dispatcher = dispatcher();
    let counter = dispatcher.register(counter_directive(250, Some("+")));
    let typed = dispatcher.register(typed_directive("Hello"));
    let progress = dispatcher.register(Directive::Progress { percent: 75 });
    let fade = dispatcher.register(Directive::Fade);

    let patches = dispatcher.trigger_all();
    assert_eq!(patches.len(), 4, "Every pending watchable gets its patch");

    let find = |id| {
        patches
            .iter()
            .find(|(patched, _)| *patched == id)
            .map(|(_, patch)| patch)
            .unwrap()
    };
    assert_eq!(*find(counter), Patch::SetText("250+".to_string()));
    assert_eq!(*find(typed), Patch::SetText("Hello".to_string()));
    assert_eq!(*find(progress), Patch::SetBarWidth(75));
    assert_eq!(*find(fade), Patch::Reveal);

    for id in [counter, typed, progress, fade] {
        assert_eq!(
            dispatcher.on_visibility(id, true, 1.0),
            TriggerOutcome::Ignored,
            "Eagerly fired watchables must not fire again"
        );
        assert_eq!(dispatcher.tick(id), None);
    }
}

#[test]
fn test_trigger_all_skips_already_finished() {
    let mut dispatcher = dispatcher();
    let finished = dispatcher.register(counter_directive(5, None));
    let pending = dispatcher.register(Directive::Fade);

    dispatcher.on_visibility(finished, true, 0.5);
    drain(&mut dispatcher, finished);

    let patches = dispatcher.trigger_all();
    assert_eq!(patches.len(), 1, "Only the pending watchable needs a patch");
    assert_eq!(patches[0].0, pending);
}

#[test]
fn test_cadence_per_kind() {
    let mut dispatcher = dispatcher();
    let counter = dispatcher.register(counter_directive(10, None));
    let typed = dispatcher.register(typed_directive("hi"));
    let fade = dispatcher.register(Directive::Fade);

    assert_eq!(dispatcher.cadence_ms(counter), Some(16));
    assert_eq!(dispatcher.cadence_ms(typed), Some(50));
    assert_eq!(dispatcher.cadence_ms(fade), Some(0));
    assert_eq!(dispatcher.cadence_ms(WatchId::from_u64(999)), None);
}

#[test]
fn test_register_assigns_distinct_ids() {
    let mut dispatcher = dispatcher();
    let a = dispatcher.register(Directive::Fade);
    let b = dispatcher.register(Directive::Fade);

    assert_ne!(a, b);
    assert_eq!(dispatcher.len(), 2);
    assert!(!dispatcher.is_empty());
}

#[test]
fn test_custom_threshold_is_honored() {
    let settings = RevealSettings {
        threshold: 0.5,
        ..RevealSettings::default()
    };
    let mut dispatcher = RevealDispatcher::new(settings);
    let id = dispatcher.register(Directive::Fade);

    assert_eq!(
        dispatcher.on_visibility(id, true, 0.4),
        TriggerOutcome::Ignored
    );
    assert_eq!(
        dispatcher.on_visibility(id, true, 0.5),
        TriggerOutcome::Triggered
    );
}
