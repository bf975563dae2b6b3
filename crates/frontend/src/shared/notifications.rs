//! Transient toast notifications.
//!
//! `Notifications` is provided at the app root; any component can push a
//! toast and it disappears on its own after `ui.toast_duration_ms`.

use crate::shared::config::app_config;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastIntent {
    Success,
    Error,
    Info,
}

impl ToastIntent {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    id: u64,
    intent: ToastIntent,
    message: String,
}

#[derive(Clone, Copy)]
pub struct Notifications {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastIntent::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastIntent::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastIntent::Info, message.into());
    }

    /// `Ok` text as success, `Err` text as error
    pub fn report(&self, outcome: Result<String, String>) {
        match outcome {
            Ok(message) => self.success(message),
            Err(message) => self.error(message),
        }
    }

    fn push(&self, intent: ToastIntent, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|t| {
            t.push(Toast {
                id,
                intent,
                message,
            })
        });

        let toasts = self.toasts;
        let duration = app_config().ui.toast_duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            toasts.update(|t| t.retain(|toast| toast.id != id));
        });
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not found in context")
}

/// Renders the toast stack, top-right
#[component]
pub fn Toaster() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toaster">
            <For
                each=move || notifications.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.intent.class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
