//! Application root.
//!
//! Loads the embedded site content, owns the page-wide signals (theme,
//! mobile menu, scroll effects), and wires the reveal driver once the
//! sections are in the DOM.

use dioxus::prelude::*;
use folio_types::SiteContent;

use crate::components::{
    AboutSection, ContactSection, Footer, HeroSection, Navbar, ProjectsSection, SkillsSection,
    TestimonialsSection, ToastFrame, use_toast_provider,
};
use crate::reveal_driver;
use crate::scroll;
use crate::theme;

static CSS: Asset = asset!("/assets/styles.css");

/// Site content compiled into the bundle.
const CONTENT_TOML: &str = include_str!("../assets/content.toml");

fn load_content() -> SiteContent {
    match folio_core::load_site_content(CONTENT_TOML) {
        Ok(content) => content,
        Err(error) => {
            tracing::error!(%error, "site content failed to parse, rendering empty skeleton");
            SiteContent::default()
        }
    }
}

pub fn App() -> Element {
    use_toast_provider();

    let content = use_signal(load_content);
    let current_theme = use_signal(theme::load);
    let menu_open = use_signal(|| false);
    let effects = scroll::use_scroll_effects();

    // Reflect theme changes on the document body.
    use_effect(move || {
        theme::apply(current_theme());
    });

    // Scan for reveal directives after the first render has committed.
    let settings = content.read().settings;
    use_effect(move || {
        reveal_driver::install(settings);
    });

    let site = content();
    let progress = (effects.progress_pct)();

    rsx! {
        link { rel: "stylesheet", href: CSS }
        div { class: "scroll-progress", style: "width: {progress}%" }
        Navbar {
            brand: site.profile.name.clone(),
            theme: current_theme,
            menu_open,
            effects,
        }
        main {
            HeroSection { hero: site.hero.clone(), parallax: effects.parallax_px }
            AboutSection { profile: site.profile.clone(), stats: site.stats.clone() }
            SkillsSection { skills: site.skills.clone() }
            ProjectsSection { projects: site.projects.clone() }
            TestimonialsSection {
                testimonials: site.testimonials.clone(),
                interval_ms: site.settings.slider_interval_ms,
            }
            ContactSection { contact: site.contact.clone() }
        }
        Footer {
            name: site.profile.name.clone(),
            links: site.contact.links.clone(),
            back_to_top: effects.back_to_top,
        }
        ToastFrame {}
    }
}
