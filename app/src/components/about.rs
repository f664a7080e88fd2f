//! About section: bio paragraphs plus the animated stat counters.

use dioxus::prelude::*;
use folio_types::{Profile, StatItem};

#[component]
pub fn AboutSection(profile: Profile, stats: Vec<StatItem>) -> Element {
    rsx! {
        section { id: "about", class: "about",
            h2 { class: "section-title", "About" }
            div { class: "about-grid",
                div { class: "about-text", "data-reveal": "fade",
                    p { class: "about-role", "{profile.role}" }
                    for paragraph in profile.about.iter() {
                        p { "{paragraph}" }
                    }
                    p { class: "about-location", "{profile.location}" }
                }
                div { class: "stats-grid",
                    for stat in stats.iter() {
                        div { class: "stat-card",
                            span {
                                class: "stat-value",
                                "data-reveal": "counter",
                                "data-reveal-value": "{stat.target}",
                                "data-reveal-suffix": stat.suffix_str().to_string(),
                                "0"
                            }
                            span { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}
