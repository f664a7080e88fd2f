//! Landing section with the typed headline.

use dioxus::prelude::*;
use folio_types::Hero;

use crate::scroll;

#[component]
pub fn HeroSection(hero: Hero, parallax: Signal<f64>) -> Element {
    let offset = parallax();
    let typed_line = hero.typed_lines.first().cloned().unwrap_or_default();

    rsx! {
        section { id: "home", class: "hero",
            div {
                class: "hero-inner",
                style: "transform: translateY({offset}px)",
                h1 { class: "hero-headline", "{hero.headline}" }
                p { class: "hero-typed",
                    span {
                        class: "typed-text",
                        "data-reveal": "typed",
                        "data-reveal-value": "{typed_line}",
                        aria_label: "{typed_line}",
                    }
                    span { class: "typed-cursor", aria_hidden: "true", "|" }
                }
                p { class: "hero-intro", "{hero.intro}" }
                a {
                    class: "hero-cta",
                    href: "#projects",
                    onclick: move |e| {
                        e.prevent_default();
                        scroll::scroll_to_section("projects");
                    },
                    "View my work"
                }
            }
        }
    }
}
