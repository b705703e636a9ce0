// web_app/services.rs - Collaborators the review page talks to
//
// Toasts, router navigation, scrolling and the review API are reached
// through these traits instead of globals. The app provides browser-backed
// implementations through Leptos context; tests hand in recording fakes.

use std::sync::Arc;

use crate::web_app::api::ReviewSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Warning,
    Error,
}

/// A transient, dismissible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotifyLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(level: NotifyLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

pub trait Navigator: Send + Sync {
    /// Client-side navigation to an absolute path (query string included)
    fn navigate(&self, path: &str);
}

pub trait Viewport: Send + Sync {
    /// Scroll the element with `anchor_id` into view.
    ///
    /// Returns `false` when no such element is in the document.
    fn scroll_into_view(&self, anchor_id: &str) -> bool;
}

/// Everything the review page needs from the outside world
#[derive(Clone)]
pub struct Services {
    pub reviews: Arc<dyn ReviewSource>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
    pub viewport: Arc<dyn Viewport>,
}
