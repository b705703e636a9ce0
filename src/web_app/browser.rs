// web_app/browser.rs - Collaborators backed by the router and the DOM
//
// Both are only exercised from event handlers and effects, which never run
// during server-side rendering.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::web_app::services::{Navigator, Viewport};

type NavigateFn = Box<dyn Fn(&str, NavigateOptions)>;

/// Navigation through the Leptos router
///
/// Must be created inside `<Router>`.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigate: StoredValue<NavigateFn, LocalStorage>,
}

impl RouterNavigator {
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        let navigate: NavigateFn = Box::new(move |path, options| navigate(path, options));

        Self {
            navigate: StoredValue::new_local(navigate),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        let navigated = self
            .navigate
            .try_with_value(|navigate| navigate(path, NavigateOptions::default()));

        if navigated.is_none() {
            tracing::debug!("Router disposed, not navigating to {}", path);
        }
    }
}

/// Smooth scrolling in the live document
#[derive(Clone, Copy, Debug, Default)]
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_into_view(&self, anchor_id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(anchor_id))
        else {
            return false;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
