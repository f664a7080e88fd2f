//! Top navigation bar.
//!
//! Casts a shadow once the page scrolls, slides away on scroll-down past
//! the fold, highlights the link for the section in view, and collapses
//! into a hamburger menu on small screens.

use dioxus::prelude::*;
use folio_core::theme::Theme;

use crate::scroll::{self, ScrollEffects};

const NAV_LINKS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

#[component]
pub fn Navbar(
    brand: String,
    mut theme: Signal<Theme>,
    mut menu_open: Signal<bool>,
    effects: ScrollEffects,
) -> Element {
    let shadow = (effects.nav_shadow)();
    let hidden = (effects.nav_hidden)();
    let active = (effects.active_section)();
    let open = menu_open();

    let mut nav_class = String::from("navbar");
    if shadow {
        nav_class.push_str(" scrolled");
    }
    if hidden {
        nav_class.push_str(" hidden");
    }

    rsx! {
        nav { class: "{nav_class}",
            div { class: "nav-inner",
                a {
                    class: "nav-brand",
                    href: "#home",
                    onclick: move |e| {
                        e.prevent_default();
                        scroll::scroll_to_top();
                    },
                    "{brand}"
                }
                ul { class: if open { "nav-links open" } else { "nav-links" },
                    for (id, label) in NAV_LINKS {
                        li {
                            a {
                                class: if active == id { "nav-link active" } else { "nav-link" },
                                href: "#{id}",
                                onclick: move |e| {
                                    e.prevent_default();
                                    scroll::scroll_to_section(id);
                                    menu_open.set(false);
                                },
                                "{label}"
                            }
                        }
                    }
                }
                button {
                    class: "theme-toggle",
                    aria_label: "Toggle color theme",
                    onclick: move |_| {
                        let next = theme().toggled();
                        theme.set(next);
                        crate::theme::store(next);
                    },
                    if theme().is_light() { "☾" } else { "☀" }
                }
                button {
                    class: "nav-toggle",
                    aria_label: "Toggle navigation menu",
                    onclick: move |_| {
                        let now = !menu_open();
                        menu_open.set(now);
                    },
                    if open { "✕" } else { "☰" }
                }
            }
        }
    }
}
