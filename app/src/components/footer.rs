//! Footer with the back-to-top button.

use dioxus::prelude::*;
use folio_types::SocialLink;

use crate::scroll;

#[component]
pub fn Footer(name: String, links: Vec<SocialLink>, back_to_top: Signal<bool>) -> Element {
    let year = js_sys::Date::new_0().get_full_year();
    let visible = back_to_top();

    rsx! {
        footer { class: "footer",
            div { class: "footer-inner",
                span { class: "footer-copy", "© {year} {name}" }
                ul { class: "footer-links",
                    for link in links.iter() {
                        li {
                            a {
                                href: "{link.url}",
                                target: "_blank",
                                rel: "noopener",
                                "{link.label}"
                            }
                        }
                    }
                }
            }
            button {
                class: if visible { "back-to-top visible" } else { "back-to-top" },
                aria_label: "Back to top",
                onclick: move |_| scroll::scroll_to_top(),
                "↑"
            }
        }
    }
}
