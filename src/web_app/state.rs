// web_app/state.rs - Review list fetch lifecycle
//
// The page keeps one `ReviewListState` in a signal. Each fetch is started
// with `begin`, which hands out a ticket, and finished with `complete`.
// A response is applied only if its ticket is still the newest one and it
// was issued for the query string currently shown; anything else is a late
// answer to a superseded request and is dropped without a trace.

use crate::web_app::config::{LOGIN_PATH, REVIEW_ANCHOR_ID, REVIEW_LIST_PATH};
use crate::web_app::error::{ErrorKind, FetchError};
use crate::web_app::model::{PageInfo, Review, ReviewPage};
use crate::web_app::query::normalize_search;
use crate::web_app::services::{Navigator, Notification, Notifier, Viewport};

/// Identifies one fetch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    /// Query string the fetch was issued for, without the leading `?`
    pub query: String,
}

/// What `complete` did with a response
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    /// New reviews and page info are in place
    Applied { count: usize },
    /// The fetch failed; state is untouched
    Failed(FetchError),
    /// A newer fetch superseded this one
    Discarded,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewListState {
    reviews: Option<Vec<Review>>,
    page_info: Option<PageInfo>,
    current_query: String,
    latest_seq: u64,
    in_flight: bool,
}

impl ReviewListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a fetch for `search` is starting.
    pub fn begin(&mut self, search: &str) -> RequestTicket {
        self.latest_seq = self.latest_seq.wrapping_add(1);
        self.current_query = normalize_search(search).to_string();
        self.in_flight = true;

        RequestTicket {
            seq: self.latest_seq,
            query: self.current_query.clone(),
        }
    }

    /// Fold a finished fetch into the state.
    ///
    /// Reviews and page info are replaced together or not at all.
    pub fn complete(
        &mut self,
        ticket: &RequestTicket,
        result: Result<ReviewPage, FetchError>,
    ) -> FetchOutcome {
        if ticket.seq != self.latest_seq || ticket.query != self.current_query {
            tracing::debug!(
                "Dropping stale review response for '{}' (current '{}')",
                ticket.query,
                self.current_query
            );
            return FetchOutcome::Discarded;
        }

        self.in_flight = false;

        match result {
            Ok(page) => {
                let count = page.review_list.len();
                self.reviews = Some(page.review_list);
                self.page_info = page.page_info;
                FetchOutcome::Applied { count }
            }
            Err(error) => FetchOutcome::Failed(error),
        }
    }

    /// Reviews from the latest successful fetch; empty before the first one
    pub fn reviews(&self) -> &[Review] {
        self.reviews.as_deref().unwrap_or_default()
    }

    pub fn page_info(&self) -> Option<PageInfo> {
        self.page_info
    }

    pub fn current_query(&self) -> &str {
        &self.current_query
    }

    pub fn is_loaded(&self) -> bool {
        self.reviews.is_some()
    }

    /// True only while the very first fetch is pending; later fetches keep
    /// showing the previous page until they land.
    pub fn is_initial_load(&self) -> bool {
        self.in_flight && self.reviews.is_none()
    }
}

/// Tell the user about a finished fetch.
///
/// Only failures are reported. An expired session also leaves the page
/// for the login route.
pub fn report_outcome(outcome: &FetchOutcome, notifier: &dyn Notifier, navigator: &dyn Navigator) {
    match outcome {
        FetchOutcome::Applied { count } => {
            tracing::info!("Loaded {} reviews", count);
        }
        FetchOutcome::Discarded => {}
        FetchOutcome::Failed(error) => {
            let kind = error.kind();
            tracing::error!("Review fetch failed ({:?}): {}", kind, error);

            notifier.notify(Notification::for_error(error));

            if kind == ErrorKind::SessionExpired {
                tracing::warn!("Session expired, redirecting to {}", LOGIN_PATH);
                navigator.navigate(LOGIN_PATH);
            }
        }
    }
}

/// Path of the nested detail route for a review.
///
/// Resolved against the review list route, so opening a second review
/// from an open detail does not stack segments. The list's query string
/// is carried along so the table stays on the same page.
pub fn review_detail_path(review_id: &str, search: &str) -> String {
    let search = normalize_search(search);
    let mut path = format!(
        "{REVIEW_LIST_PATH}/review/{}",
        urlencoding::encode(review_id)
    );
    if !search.is_empty() {
        path.push('?');
        path.push_str(search);
    }
    path
}

/// Row activation: open the detail route and bring its anchor into view.
pub fn open_review(
    review_id: &str,
    search: &str,
    navigator: &dyn Navigator,
    viewport: &dyn Viewport,
) {
    navigator.navigate(&review_detail_path(review_id, search));

    if !viewport.scroll_into_view(REVIEW_ANCHOR_ID) {
        tracing::debug!("#{} not in document, skipping scroll", REVIEW_ANCHOR_ID);
    }
}
