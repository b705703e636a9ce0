// web_app/components/common.rs - Reusable UI components
//
// Small, stateless building blocks that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "불러오는 중...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Card with a heading; body and footer come from the children
#[component]
pub fn Card(
    heading: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="w-full bg-white rounded-2xl shadow-sm border border-gray-100">
            <header class="px-6 pt-6 pb-2">
                <h2 class="text-2xl font-bold text-gray-900">{heading}</h2>
            </header>
            {children()}
        </section>
    }
}
