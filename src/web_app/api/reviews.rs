// web_app/api/reviews.rs - Fetching the member's reviews

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;

use crate::web_app::config::ClientConfig;
use crate::web_app::error::FetchError;
use crate::web_app::model::ReviewPage;

/// Source of review pages
///
/// `query` is the raw query string of the current location (leading `?`
/// optional); it is forwarded to the backend verbatim. The returned future
/// is local because browser fetches are not `Send`.
pub trait ReviewSource: Send + Sync {
    fn my_reviews(&self, query: &str) -> LocalBoxFuture<'static, Result<ReviewPage, FetchError>>;
}

/// `GET /api/review/my` through the browser's fetch API
#[derive(Clone, Debug, Default)]
pub struct HttpReviewSource {
    config: ClientConfig,
}

impl HttpReviewSource {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl ReviewSource for HttpReviewSource {
    fn my_reviews(&self, query: &str) -> LocalBoxFuture<'static, Result<ReviewPage, FetchError>> {
        let url = self.config.review_list_url(query);

        async move {
            tracing::debug!("GET {}", url);

            let response = Request::get(&url)
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            if !response.ok() {
                return Err(FetchError::from_response(status, &body));
            }

            ReviewPage::from_json(&body)
        }
        .boxed_local()
    }
}
