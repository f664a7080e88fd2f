//! Project cards.

use dioxus::prelude::*;
use folio_types::Project;

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> Element {
    rsx! {
        section { id: "projects", class: "projects",
            h2 { class: "section-title", "Projects" }
            div { class: "projects-grid",
                for project in projects.iter() {
                    article {
                        class: if project.featured { "project-card featured" } else { "project-card" },
                        "data-reveal": "fade",
                        h3 { class: "project-title", "{project.title}" }
                        p { class: "project-summary", "{project.summary}" }
                        ul { class: "project-tags",
                            for tag in project.tags.iter() {
                                li { class: "project-tag", "{tag}" }
                            }
                        }
                        div { class: "project-links",
                            if let Some(url) = project.url.as_ref() {
                                a {
                                    class: "project-link",
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener",
                                    "Live"
                                }
                            }
                            if let Some(url) = project.source_url.as_ref() {
                                a {
                                    class: "project-link",
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener",
                                    "Source"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
