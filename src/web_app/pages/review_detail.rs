// web_app/pages/review_detail.rs - Nested review detail route
//
// The detail view itself lives elsewhere; this route only renders the
// anchor the list page scrolls to, so the outlet and the scroll target
// exist end to end.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::web_app::config::REVIEW_ANCHOR_ID;

#[component]
pub fn ReviewDetail() -> impl IntoView {
    let params = use_params_map();
    let review_id = move || params.get().get("review_id").unwrap_or_default();

    view! {
        <section
            id=REVIEW_ANCHOR_ID
            class="w-full bg-white rounded-2xl shadow-sm border border-gray-100 p-6"
        >
            <h3 class="text-lg font-bold text-gray-900">"리뷰 #" {review_id}</h3>
        </section>
    }
}
