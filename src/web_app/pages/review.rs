// web_app/pages/review.rs - Member review list page
//
// Lists the current member's reviews one page at a time. The page number
// (and any other filter) lives in the query string; the page fetches
// whenever the query string changes and drops answers that arrive after a
// newer request was issued or after the page was left.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::web_app::components::*;
use crate::web_app::query::{normalize_search, QueryString};
use crate::web_app::services::Services;
use crate::web_app::state::{open_review, report_outcome, ReviewListState};

pub const REVIEW_LIST_HEADING: &str = "리뷰 목록";

/// Review list page
///
/// Composes:
/// - Review table (rows open the nested detail route)
/// - Pagination driven by the server's page info
/// - Outlet for `review/:review_id`
#[component]
pub fn MemberReviewPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let location = use_location();

    // Raw query string, without `?`; the fetch key
    let search = Memo::new(move |_| normalize_search(&location.search.get()).to_string());
    let path = Signal::derive(move || location.pathname.get());
    let query = Signal::derive(move || QueryString::parse(&search.get()));

    let state = RwSignal::new(ReviewListState::new());

    let fetch_services = services.clone();
    Effect::new(move |_| {
        let search = search.get();
        let Some(ticket) = state.try_update(|s| s.begin(&search)) else {
            return;
        };

        tracing::info!("Fetching reviews for '{}'", ticket.query);

        let services = fetch_services.clone();
        spawn_local(async move {
            let result = services.reviews.my_reviews(&ticket.query).await;

            match state.try_update(|s| s.complete(&ticket, result)) {
                Some(outcome) => report_outcome(
                    &outcome,
                    services.notifier.as_ref(),
                    services.navigator.as_ref(),
                ),
                None => {
                    tracing::debug!("Review page left before '{}' finished", ticket.query)
                }
            }
        });
    });

    let reviews = Signal::derive(move || state.with(|s| s.reviews().to_vec()));
    let page_info = Signal::derive(move || state.with(|s| s.page_info()));
    let loading = Signal::derive(move || state.with(|s| s.is_initial_load()));

    let on_open = Callback::new(move |review_id: String| {
        open_review(
            &review_id,
            &search.get_untracked(),
            services.navigator.as_ref(),
            services.viewport.as_ref(),
        );
    });

    view! {
        <div class="w-full flex flex-col gap-5">
            <Card heading=REVIEW_LIST_HEADING>
                <div class="px-6 py-4">
                    <Show when=move || loading.get()>
                        <Loading />
                    </Show>
                    <ReviewTable reviews=reviews on_open=on_open />
                </div>
                <footer class="flex justify-center px-6 pb-6">
                    <Pagination page_info=page_info path=path query=query />
                </footer>
            </Card>
            <Outlet />
        </div>
    }
}
