// common/mod.rs - Recording fakes for the review page's collaborators
//
// Every fake stores what it was asked to do so tests can assert on toasts,
// navigations and scrolls without a browser.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::future::{self, FutureExt, LocalBoxFuture};
use storefront::web_app::api::ReviewSource;
use storefront::web_app::error::FetchError;
use storefront::web_app::model::ReviewPage;
use storefront::web_app::query::normalize_search;
use storefront::web_app::services::{Navigator, Notification, Notifier, Services, Viewport};

#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.shown.lock().unwrap().push(notification);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.lock().unwrap().push(path.to_string());
    }
}

/// Document that may or may not contain the anchor
#[derive(Default)]
pub struct FakeViewport {
    pub anchors: Vec<String>,
    pub scrolled: Mutex<Vec<String>>,
}

impl FakeViewport {
    pub fn with_anchor(id: &str) -> Self {
        Self {
            anchors: vec![id.to_string()],
            scrolled: Mutex::new(Vec::new()),
        }
    }

    pub fn scrolled(&self) -> Vec<String> {
        self.scrolled.lock().unwrap().clone()
    }
}

impl Viewport for FakeViewport {
    fn scroll_into_view(&self, anchor_id: &str) -> bool {
        if self.anchors.iter().any(|a| a == anchor_id) {
            self.scrolled.lock().unwrap().push(anchor_id.to_string());
            true
        } else {
            false
        }
    }
}

/// Answers each query string with a canned result
#[derive(Default)]
pub struct ScriptedSource {
    pub responses: Mutex<HashMap<String, Result<ReviewPage, FetchError>>>,
    pub requested: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn respond(&self, query: &str, result: Result<ReviewPage, FetchError>) {
        self.responses
            .lock()
            .unwrap()
            .insert(normalize_search(query).to_string(), result);
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl ReviewSource for ScriptedSource {
    fn my_reviews(&self, query: &str) -> LocalBoxFuture<'static, Result<ReviewPage, FetchError>> {
        let query = normalize_search(query).to_string();
        self.requested.lock().unwrap().push(query.clone());

        let result = self
            .responses
            .lock()
            .unwrap()
            .get(&query)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Network(format!("no response scripted for '{query}'"))));

        future::ready(result).boxed_local()
    }
}

/// All fakes plus the `Services` bundle pointing at them
pub struct Harness {
    pub source: Arc<ScriptedSource>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
    pub viewport: Arc<FakeViewport>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_viewport(FakeViewport::default())
    }

    pub fn with_viewport(viewport: FakeViewport) -> Self {
        Self {
            source: Arc::new(ScriptedSource::default()),
            notifier: Arc::new(RecordingNotifier::default()),
            navigator: Arc::new(RecordingNavigator::default()),
            viewport: Arc::new(viewport),
        }
    }

    pub fn services(&self) -> Services {
        Services {
            reviews: self.source.clone(),
            notifier: self.notifier.clone(),
            navigator: self.navigator.clone(),
            viewport: self.viewport.clone(),
        }
    }
}
