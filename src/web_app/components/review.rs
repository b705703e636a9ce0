// web_app/components/review.rs - Review table

use leptos::prelude::*;

use crate::web_app::format::{format_rate, format_reg_date};
use crate::web_app::model::Review;

pub const EMPTY_REVIEWS_MESSAGE: &str = "아직 등록된 리뷰가 없습니다";

/// Column headings, left to right
pub const REVIEW_COLUMNS: [&str; 4] = ["상품명", "리뷰 내용", "별점", "등록일자"];

/// Table of reviews; a single placeholder row stands in for an empty list
#[component]
pub fn ReviewTable(
    #[prop(into)]
    reviews: Signal<Vec<Review>>,
    /// Called with the review id of a clicked row
    on_open: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-sm">
                <thead class="border-b border-gray-200 text-gray-500 uppercase text-xs">
                    <tr>
                        {REVIEW_COLUMNS
                            .iter()
                            .map(|heading| view! { <th class="px-4 py-3 text-center">{*heading}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let reviews = reviews.get();
                        if reviews.is_empty() {
                            view! { <EmptyReviewRow /> }.into_any()
                        } else {
                            reviews
                                .into_iter()
                                .map(|review| view! { <ReviewRow review=review on_open=on_open /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ReviewRow(review: Review, on_open: Callback<String>) -> impl IntoView {
    let Review {
        review_id,
        product_name,
        review_content,
        rate,
        review_reg_time,
    } = review;

    let row_id = review_id.clone();

    view! {
        <tr
            class="border-b border-gray-100 cursor-pointer hover:bg-gray-50 transition-colors"
            data-review-id=review_id
            on:click=move |_| on_open.run(row_id.clone())
        >
            <td class="px-4 py-3 text-center">{product_name}</td>
            <td class="px-4 py-3 text-center">{review_content}</td>
            <td class="px-4 py-3 text-center">{format_rate(rate)}</td>
            <td class="px-4 py-3 text-center">{format_reg_date(&review_reg_time)}</td>
        </tr>
    }
}

#[component]
fn EmptyReviewRow() -> impl IntoView {
    view! {
        <tr data-empty="true">
            <td colspan=REVIEW_COLUMNS.len().to_string() class="h-5 px-4 py-6 text-center text-gray-500">
                {EMPTY_REVIEWS_MESSAGE}
            </td>
        </tr>
    }
}
