//! Scroll-linked page effects.
//!
//! One listener on the window scroll event drives everything scroll-shaped:
//! navbar shadow and hide-on-scroll-down, the reading-progress bar, the
//! back-to-top button, the hero parallax, and which nav link is highlighted.
//! Thresholds live here so the components stay free of magic numbers.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Scroll offset past which the navbar casts its shadow.
const NAV_SHADOW_Y: f64 = 50.0;
/// Scroll offset past which scrolling down hides the navbar.
const NAV_HIDE_Y: f64 = 300.0;
/// Scroll offset past which the back-to-top button appears.
const BACK_TO_TOP_Y: f64 = 300.0;
/// Fraction of the scroll offset applied to the hero as parallax.
const PARALLAX_FACTOR: f64 = 0.4;
/// How far above a section's top it already counts as the active one.
const ACTIVE_SECTION_MARGIN: f64 = 200.0;

/// Signals written by the shared scroll listener.
#[derive(Clone, Copy, PartialEq)]
pub struct ScrollEffects {
    pub nav_shadow: Signal<bool>,
    pub nav_hidden: Signal<bool>,
    pub progress_pct: Signal<f64>,
    pub back_to_top: Signal<bool>,
    pub parallax_px: Signal<f64>,
    pub active_section: Signal<String>,
}

/// Create the scroll signals and install the window listener once.
pub fn use_scroll_effects() -> ScrollEffects {
    let effects = ScrollEffects {
        nav_shadow: use_signal(|| false),
        nav_hidden: use_signal(|| false),
        progress_pct: use_signal(|| 0.0),
        back_to_top: use_signal(|| false),
        parallax_px: use_signal(|| 0.0),
        active_section: use_signal(String::new),
    };
    use_future(move || async move {
        install(effects);
    });
    effects
}

fn install(mut effects: ScrollEffects) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let last_y = Rc::new(Cell::new(0.0_f64));
    let closure = Closure::<dyn FnMut()>::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let y = window.scroll_y().unwrap_or(0.0);

        effects.nav_shadow.set(y > NAV_SHADOW_Y);
        let going_down = y > last_y.get();
        effects.nav_hidden.set(going_down && y > NAV_HIDE_Y);
        last_y.set(y);

        effects.back_to_top.set(y > BACK_TO_TOP_Y);
        effects.parallax_px.set(y * PARALLAX_FACTOR);
        effects.progress_pct.set(progress_pct(&window, y));
        if let Some(active) = active_section(&window, y) {
            effects.active_section.set(active);
        }
    });
    if window
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

/// Scrolled fraction of the document, 0 to 100.
fn progress_pct(window: &web_sys::Window, y: f64) -> f64 {
    let Some(root) = window.document().and_then(|document| document.document_element()) else {
        return 0.0;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    let track = f64::from(root.scroll_height()) - viewport;
    if track <= 0.0 {
        100.0
    } else {
        (y / track * 100.0).clamp(0.0, 100.0)
    }
}

/// Id of the lowest section whose top has scrolled into reach.
fn active_section(window: &web_sys::Window, y: f64) -> Option<String> {
    let document = window.document()?;
    let sections = document.query_selector_all("section[id]").ok()?;
    let mut current = None;
    for index in 0..sections.length() {
        let Some(section) = sections
            .get(index)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        if y >= f64::from(section.offset_top()) - ACTIVE_SECTION_MARGIN {
            current = Some(section.id());
        }
    }
    current
}

/// Smooth-scroll to an in-page section by element id.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
