//! Contact section: validated form plus direct links.
//!
//! Validation runs in `folio_core::contact`; this component only renders
//! the outcome. All failures surface at once, each next to its field.

use dioxus::prelude::*;
use folio_core::{ContactField, ContactSubmission, FieldError};
use folio_types::ContactInfo;

use super::toast::use_toast;

fn error_for(errors: &[FieldError], field: ContactField) -> Option<String> {
    errors
        .iter()
        .find(|error| error.field == field)
        .map(|error| error.message.clone())
}

#[component]
pub fn ContactSection(contact: ContactInfo) -> Element {
    let mut toasts = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut field_errors = use_signal(Vec::<FieldError>::new);

    let errors = field_errors.read();
    let name_error = error_for(&errors, ContactField::Name);
    let email_error = error_for(&errors, ContactField::Email);
    let message_error = error_for(&errors, ContactField::Message);
    drop(errors);

    let onsubmit = move |e: Event<FormData>| {
        e.prevent_default();
        let submission = ContactSubmission {
            name: name(),
            email: email(),
            message: message(),
        };
        match submission.validate() {
            Ok(()) => {
                field_errors.set(Vec::new());
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                toasts.success("Thanks for reaching out. I'll reply soon.");
            }
            Err(errors) => {
                field_errors.set(errors);
                toasts.error("Please fix the highlighted fields.");
            }
        }
    };

    rsx! {
        section { id: "contact", class: "contact",
            h2 { class: "section-title", "Contact" }
            div { class: "contact-grid",
                div { class: "contact-aside",
                    p { class: "contact-lede", "Have a project in mind? Let's talk." }
                    a { class: "contact-email", href: "mailto:{contact.email}", "{contact.email}" }
                    ul { class: "contact-links",
                        for link in contact.links.iter() {
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
                form { class: "contact-form", onsubmit,
                    div { class: "form-field",
                        label { r#for: "contact-name", "Name" }
                        input {
                            id: "contact-name",
                            class: if name_error.is_some() { "form-input has-error" } else { "form-input" },
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                        if let Some(ref error) = name_error {
                            span { class: "field-error", "{error}" }
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "contact-email", "Email" }
                        input {
                            id: "contact-email",
                            class: if email_error.is_some() { "form-input has-error" } else { "form-input" },
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                        if let Some(ref error) = email_error {
                            span { class: "field-error", "{error}" }
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "contact-message", "Message" }
                        textarea {
                            id: "contact-message",
                            class: if message_error.is_some() { "form-input has-error" } else { "form-input" },
                            rows: "5",
                            value: "{message}",
                            oninput: move |e| message.set(e.value()),
                        }
                        if let Some(ref error) = message_error {
                            span { class: "field-error", "{error}" }
                        }
                    }
                    button { class: "form-submit", r#type: "submit", "Send message" }
                }
            }
        }
    }
}
