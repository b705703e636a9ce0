// web_app/components/pagination.rs - Pagination controls
//
// `Pagination` only draws buttons from the server's page info. A click
// changes the URL and nothing else: the page component owns the fetch and
// reacts to the new query string.

use leptos::prelude::*;

use crate::web_app::model::PageInfo;
use crate::web_app::paging::{pagination_buttons, ButtonLabel, ButtonVariant};
use crate::web_app::query::{page_href, QueryString};
use crate::web_app::services::Services;

/// Page number buttons with previous/next arrows
///
/// Renders nothing until page info is available.
#[component]
pub fn Pagination(
    /// Window reported by the backend
    #[prop(into)]
    page_info: Signal<Option<PageInfo>>,
    /// Path the buttons stay on
    #[prop(into)]
    path: Signal<String>,
    /// Current query parameters, carried over to every target
    #[prop(into)]
    query: Signal<QueryString>,
) -> impl IntoView {
    move || {
        page_info.get().map(|info| {
            let buttons = pagination_buttons(&info);

            view! {
                <nav class="flex justify-center" aria-label="pagination">
                    <div class="inline-flex items-center gap-1">
                        {buttons
                            .into_iter()
                            .map(|button| {
                                view! {
                                    <PageButton
                                        page=button.target
                                        variant=button.variant
                                        path=path
                                        query=query
                                    >
                                        {label_view(button.label)}
                                    </PageButton>
                                }
                            })
                            .collect_view()}
                    </div>
                </nav>
            }
        })
    }
}

/// Single button that moves the current URL to `page`
///
/// Every query parameter other than the page number is preserved.
#[component]
pub fn PageButton(
    page: u32,
    variant: ButtonVariant,
    #[prop(into)]
    path: Signal<String>,
    #[prop(into)]
    query: Signal<QueryString>,
    children: Children,
) -> impl IntoView {
    let navigator = expect_context::<Services>().navigator;

    let class = match variant {
        ButtonVariant::Solid => {
            "min-w-10 h-10 px-3 rounded-lg bg-blue-600 text-white font-semibold shadow-sm"
        }
        ButtonVariant::Ghost => {
            "min-w-10 h-10 px-3 rounded-lg text-gray-700 font-medium hover:bg-gray-100 transition-colors"
        }
    };

    let on_click = move |_| {
        let href = page_href(&path.get_untracked(), &query.get_untracked(), page);
        tracing::debug!("Page button {} -> {}", page, href);
        navigator.navigate(&href);
    };

    view! {
        <button
            type="button"
            class=class
            data-page=page.to_string()
            data-variant=variant.as_str()
            aria-current=(variant == ButtonVariant::Solid).then_some("page")
            on:click=on_click
        >
            {children()}
        </button>
    }
}

fn label_view(label: ButtonLabel) -> AnyView {
    match label {
        ButtonLabel::Prev => view! {
            <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-label="이전 페이지">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7"></path>
            </svg>
        }
        .into_any(),
        ButtonLabel::Page(page) => page.to_string().into_any(),
        ButtonLabel::Next => view! {
            <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-label="다음 페이지">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7"></path>
            </svg>
        }
        .into_any(),
    }
}
