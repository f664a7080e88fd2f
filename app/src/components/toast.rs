//! Toast notifications for form feedback.
//!
//! A global manager lives in context; any component can push a toast and
//! each one auto-dismisses after its severity's duration.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Severity of a toast notification.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    /// Confirmation - 4 second duration
    Success,
    /// Validation or send failure - 6 second duration
    Error,
}

/// A single toast notification.
#[derive(Clone)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: ToastSeverity,
}

/// Global toast manager for showing notifications.
///
/// Access via `use_toast()` from any component.
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(vec![]),
            next_id: Signal::new(0),
        }
    }

    /// Show a toast notification.
    ///
    /// At most 4 toasts are shown at once; the oldest is dropped if exceeded.
    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        let id = *self.next_id.peek();
        *self.next_id.write() += 1;

        let toast = Toast {
            id,
            message: message.into(),
            severity,
        };

        {
            let mut toasts = self.toasts.write();
            if toasts.len() >= 4 {
                toasts.remove(0);
            }
            toasts.push(toast);
        }

        // Auto-dismiss after timeout
        let mut toasts_signal = self.toasts;
        let duration = match severity {
            ToastSeverity::Success => 4000,
            ToastSeverity::Error => 6000,
        };

        spawn(async move {
            TimeoutFuture::new(duration).await;
            toasts_signal.write().retain(|t| t.id != id);
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, ToastSeverity::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, ToastSeverity::Error);
    }

    /// Manually dismiss a toast by ID.
    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize toast provider at app root.
///
/// Call this once in your App component before any children that might use toasts.
pub fn use_toast_provider() -> ToastManager {
    use_context_provider(ToastManager::new)
}

/// Get the toast manager from context.
pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

/// Toast container component - renders all active toasts.
///
/// Place this once at the end of your main layout.
#[component]
pub fn ToastFrame() -> Element {
    let mut manager = use_toast();
    let toasts = manager.toasts.read();

    rsx! {
        div { class: "toast-container",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.severity {
                        ToastSeverity::Success => "toast toast-success",
                        ToastSeverity::Error => "toast toast-error",
                    },
                    span { class: "toast-icon",
                        {
                            match toast.severity {
                                ToastSeverity::Success => "✓",
                                ToastSeverity::Error => "!",
                            }
                        }
                    }
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        aria_label: "Dismiss",
                        onclick: {
                            let id = toast.id;
                            move |_| manager.dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}
