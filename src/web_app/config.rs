// web_app/config.rs - Client-side settings
//
// The WASM bundle can't read a `.env` file at runtime, so the only tunable
// (where the review API lives) is baked in at compile time. Everything else
// is a fixed path the backend and router agree on.

/// Query parameter carrying the requested page number
pub const PAGE_PARAM: &str = "p";

/// Review listing endpoint, relative to the API base
pub const REVIEW_LIST_ENDPOINT: &str = "/api/review/my";

/// Where an expired session is sent
pub const LOGIN_PATH: &str = "/login";

/// Route of the member review list page
pub const REVIEW_LIST_PATH: &str = "/review";

/// Element the review detail view renders; scrolled into view on row click
pub const REVIEW_ANCHOR_ID: &str = "reviewSection";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin (and optional prefix) of the backend; empty means same origin
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl ClientConfig {
    /// Settings captured from `STOREFRONT_API_BASE` when the crate was compiled
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("STOREFRONT_API_BASE").unwrap_or_default())
    }

    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the review listing, with the raw query appended verbatim
    pub fn review_list_url(&self, query: &str) -> String {
        let query = crate::web_app::query::normalize_search(query);
        if query.is_empty() {
            format!("{}{}", self.api_base, REVIEW_LIST_ENDPOINT)
        } else {
            format!("{}{}?{}", self.api_base, REVIEW_LIST_ENDPOINT, query)
        }
    }
}
