//! Browser driver for the reveal dispatcher.
//!
//! Scans the document for `data-reveal` elements, registers each with a
//! [`RevealDispatcher`], and bridges both directions: IntersectionObserver
//! entries become visibility reports, emitted patches become DOM writes.
//! When the observer API is missing entirely, every animation is applied
//! eagerly in its final state so the page never renders permanently hidden.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_core::reveal::{
    Directive, DirectiveError, KIND_ATTR, Patch, RevealDispatcher, RevealKind, SUFFIX_ATTR,
    TriggerOutcome, VALUE_ATTR, WatchId,
};
use folio_types::RevealSettings;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Attribute stamped onto scanned elements so observer callbacks can find
/// their way back to the registry.
const ID_ATTR: &str = "data-reveal-id";
/// Class flipped by fade patches; the stylesheet owns the transition.
const REVEALED_CLASS: &str = "revealed";

/// Maps custom attribute spellings onto the dispatcher vocabulary.
pub type KindResolver = fn(&str) -> Option<RevealKind>;

struct Binding {
    dispatcher: RefCell<RevealDispatcher>,
    elements: RefCell<HashMap<u64, Element>>,
}

/// Scan the document and wire every directive-carrying element, using the
/// standard kind spellings.
pub fn install(settings: RevealSettings) {
    install_with_resolver(settings, RevealKind::parse);
}

/// Scan with a custom kind resolver. Malformed directives are skipped with
/// a warning and never block their neighbors.
pub fn install_with_resolver(settings: RevealSettings, resolver: KindResolver) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(&format!("[{KIND_ATTR}]")) else {
        return;
    };

    let binding = Rc::new(Binding {
        dispatcher: RefCell::new(RevealDispatcher::new(settings)),
        elements: RefCell::new(HashMap::new()),
    });

    for index in 0..nodes.length() {
        let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(kind_raw) = element.get_attribute(KIND_ATTR) else {
            continue;
        };
        let value = element.get_attribute(VALUE_ATTR);
        let suffix = element.get_attribute(SUFFIX_ATTR);

        let directive = match resolver(&kind_raw) {
            Some(kind) => Directive::parse(kind, value.as_deref(), suffix.as_deref()),
            None => Err(DirectiveError::UnknownKind { kind: kind_raw }),
        };
        match directive {
            Ok(directive) => {
                let id = binding.dispatcher.borrow_mut().register(directive);
                let _ = element.set_attribute(ID_ATTR, &id.as_u64().to_string());
                binding.elements.borrow_mut().insert(id.as_u64(), element);
            }
            Err(error) => {
                tracing::warn!(%error, "skipping reveal directive");
            }
        }
    }

    if binding.dispatcher.borrow().is_empty() {
        return;
    }

    if !observer_supported() {
        reveal_eagerly(&binding);
        return;
    }
    match build_observer(&binding) {
        Ok(observer) => {
            for element in binding.elements.borrow().values() {
                observer.observe(element);
            }
        }
        Err(error) => {
            tracing::warn!(?error, "IntersectionObserver setup failed");
            reveal_eagerly(&binding);
        }
    }
}

fn observer_supported() -> bool {
    web_sys::window().is_some_and(|window| {
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false)
    })
}

/// One shared observer for all watchables, keyed back through the stamped
/// id attribute.
fn build_observer(binding: &Rc<Binding>) -> Result<IntersectionObserver, JsValue> {
    let threshold = binding.dispatcher.borrow().threshold();
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let callback_binding = Rc::clone(binding);
    let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                handle_entry(&callback_binding, &entry, &observer);
            }
        },
    );
    let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;
    closure.forget();
    Ok(observer)
}

fn handle_entry(
    binding: &Rc<Binding>,
    entry: &IntersectionObserverEntry,
    observer: &IntersectionObserver,
) {
    let element = entry.target();
    let Some(id) = watch_id_of(&element) else {
        return;
    };
    let outcome = binding.dispatcher.borrow_mut().on_visibility(
        id,
        entry.is_intersecting(),
        entry.intersection_ratio(),
    );
    if outcome == TriggerOutcome::Triggered {
        // One-shot: drop the observation handle before the first tick.
        observer.unobserve(&element);
        run_animation(Rc::clone(binding), id, element);
    }
}

fn watch_id_of(element: &Element) -> Option<WatchId> {
    element
        .get_attribute(ID_ATTR)?
        .parse::<u64>()
        .ok()
        .map(WatchId::from_u64)
}

/// Pump one watchable's animation to completion.
///
/// Liveness is checked between ticks: an element pulled out of the document
/// mid-animation releases its watchable and the loop ends quietly.
fn run_animation(binding: Rc<Binding>, id: WatchId, element: Element) {
    spawn_local(async move {
        loop {
            let Some(cadence) = binding.dispatcher.borrow().cadence_ms(id) else {
                break;
            };
            if cadence > 0 {
                TimeoutFuture::new(cadence).await;
            }
            if !element.is_connected() {
                binding.dispatcher.borrow_mut().release(id);
                binding.elements.borrow_mut().remove(&id.as_u64());
                break;
            }
            let step = binding.dispatcher.borrow_mut().tick(id);
            let Some(step) = step else {
                break;
            };
            apply_patch(&element, &step.patch);
            if step.done {
                break;
            }
        }
    });
}

/// No visibility facility: apply every animation's final state at once.
fn reveal_eagerly(binding: &Rc<Binding>) {
    tracing::warn!("IntersectionObserver unavailable, revealing everything eagerly");
    let patches = binding.dispatcher.borrow_mut().trigger_all();
    let elements = binding.elements.borrow();
    for (id, patch) in patches {
        if let Some(element) = elements.get(&id.as_u64()) {
            apply_patch(element, &patch);
        }
    }
}

fn apply_patch(element: &Element, patch: &Patch) {
    match patch {
        Patch::SetText(text) => element.set_text_content(Some(text)),
        Patch::SetBarWidth(percent) => {
            if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
                let _ = html.style().set_property("width", &format!("{percent}%"));
            }
        }
        Patch::Reveal => {
            let _ = element.class_list().add_1(REVEALED_CLASS);
        }
    }
}
