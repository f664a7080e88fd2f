//! Skills section with percentage bars that fill on first view.

use dioxus::prelude::*;
use folio_types::SkillItem;

#[component]
pub fn SkillsSection(skills: Vec<SkillItem>) -> Element {
    rsx! {
        section { id: "skills", class: "skills",
            h2 { class: "section-title", "Skills" }
            div { class: "skills-list",
                for skill in skills.iter() {
                    div { class: "skill",
                        div { class: "skill-head",
                            span { class: "skill-name", "{skill.name}" }
                            span { class: "skill-percent", "{skill.percent}%" }
                        }
                        div { class: "skill-track",
                            div {
                                class: "skill-fill",
                                "data-reveal": "progress",
                                "data-reveal-value": "{skill.percent}",
                            }
                        }
                    }
                }
            }
        }
    }
}
