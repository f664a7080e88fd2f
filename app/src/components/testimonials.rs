//! Testimonial slider.
//!
//! Advances on a fixed cadence, with arrows and dots for manual control.
//! Manual navigation does not reset the autoplay clock.

use dioxus::prelude::*;
use folio_core::SliderState;
use folio_types::Testimonial;
use gloo_timers::future::TimeoutFuture;

#[component]
pub fn TestimonialsSection(testimonials: Vec<Testimonial>, interval_ms: u32) -> Element {
    let len = testimonials.len();
    let mut slider = use_signal(move || SliderState::new(len));

    use_future(move || async move {
        if len < 2 {
            return;
        }
        loop {
            TimeoutFuture::new(interval_ms).await;
            slider.write().next();
        }
    });

    let index = slider.read().index();
    let current = testimonials.get(index).cloned();

    rsx! {
        section { id: "testimonials", class: "testimonials",
            h2 { class: "section-title", "Testimonials" }
            div { class: "slider", "data-reveal": "fade",
                button {
                    class: "slider-arrow prev",
                    aria_label: "Previous testimonial",
                    onclick: move |_| {
                        slider.write().prev();
                    },
                    "‹"
                }
                if let Some(testimonial) = current {
                    figure { class: "slide",
                        blockquote { class: "slide-quote", "\u{201c}{testimonial.quote}\u{201d}" }
                        figcaption { class: "slide-author",
                            span { class: "author-name", "{testimonial.author}" }
                            span { class: "author-role", "{testimonial.role}" }
                        }
                    }
                }
                button {
                    class: "slider-arrow next",
                    aria_label: "Next testimonial",
                    onclick: move |_| {
                        slider.write().next();
                    },
                    "›"
                }
            }
            div { class: "slider-dots",
                for i in 0..len {
                    button {
                        class: if i == index { "dot active" } else { "dot" },
                        aria_label: format!("Show testimonial {}", i + 1),
                        onclick: move |_| {
                            slider.write().set(i);
                        },
                    }
                }
            }
        }
    }
}
