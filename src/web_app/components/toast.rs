// web_app/components/toast.rs - Notification toasts
//
// `Toasts` is the store behind the `Notifier` the app provides; `Toaster`
// renders it in a fixed corner. Toasts close on their button and, in the
// browser, on their own after a few seconds.

use leptos::prelude::*;

use crate::web_app::services::{Notification, Notifier, NotifyLevel};

/// Toasts beyond this count push out the oldest
const MAX_TOASTS: usize = 5;

#[cfg(feature = "hydrate")]
const TOAST_LIFETIME: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Reactive list of visible toasts
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Show a notification; returns the toast id
    pub fn push(&self, notification: Notification) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.items.update(|items| {
            items.push(Toast { id, notification });
            if items.len() > MAX_TOASTS {
                let overflow = items.len() - MAX_TOASTS;
                items.drain(..overflow);
            }
        });

        id
    }

    /// Close a toast; unknown ids and a disposed store are ignored
    pub fn dismiss(&self, id: u64) {
        self.items.try_update(|items| items.retain(|toast| toast.id != id));
    }

    pub fn items(&self) -> Vec<Toast> {
        self.items.get()
    }
}

impl Notifier for Toasts {
    fn notify(&self, notification: Notification) {
        let id = self.push(notification);

        cfg_if::cfg_if! {
            if #[cfg(feature = "hydrate")] {
                let toasts = *self;
                set_timeout(move || toasts.dismiss(id), TOAST_LIFETIME);
            } else {
                // no timers on the server; the toast lives as long as the render
                let _ = id;
            }
        }
    }
}

fn level_class(level: NotifyLevel) -> &'static str {
    match level {
        NotifyLevel::Warning => "bg-yellow-50 border-yellow-300 text-yellow-900",
        NotifyLevel::Error => "bg-red-50 border-red-300 text-red-900",
    }
}

fn level_name(level: NotifyLevel) -> &'static str {
    match level {
        NotifyLevel::Warning => "warning",
        NotifyLevel::Error => "error",
    }
}

/// Renders the toasts of the given store
#[component]
pub fn Toaster(toasts: Toasts) -> impl IntoView {
    view! {
        <div class="fixed bottom-4 inset-x-0 z-50 flex flex-col items-center gap-2 pointer-events-none">
            <For
                each=move || toasts.items()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let Toast { id, notification } = toast;
                    view! {
                        <div
                            role="status"
                            data-level=level_name(notification.level)
                            class=format!(
                                "pointer-events-auto w-80 border rounded-xl shadow-lg px-4 py-3 flex items-start gap-3 {}",
                                level_class(notification.level),
                            )
                        >
                            <div class="flex-1">
                                <p class="font-bold">{notification.title}</p>
                                <p class="text-sm">{notification.description}</p>
                            </div>
                            <button
                                type="button"
                                class="text-lg leading-none opacity-60 hover:opacity-100"
                                title="닫기"
                                on:click=move |_| toasts.dismiss(id)
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
