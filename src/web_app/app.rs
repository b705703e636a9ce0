// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the toast layer and the services the pages use.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::api::HttpReviewSource;
use crate::web_app::browser::{DomViewport, RouterNavigator};
use crate::web_app::components::{Toaster, Toasts};
use crate::web_app::config::{ClientConfig, REVIEW_LIST_PATH};
use crate::web_app::pages::{MemberReviewPage, ReviewDetail};
use crate::web_app::services::Services;

pub const APP_TITLE: &str = "Storefront";

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Toasts shared by every page
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    let toasts = Toasts::new();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Storefront member pages" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/storefront.css" />

        <Router>
            <ProvideServices toasts=toasts>
                <Routes fallback=|| view! { <NotFound /> }>
                    <ParentRoute path=path!("/") view=HomeLayout>
                        <Route path=path!("") view=Home />

                        // Products, cart, wishlist, Q&A, payment, member and
                        // board sections are not registered yet.

                        <ParentRoute path=path!("/review") view=MemberReviewPage>
                            <Route path=path!("") view=|| () />
                            <Route path=path!("/review/:review_id") view=ReviewDetail />
                        </ParentRoute>
                    </ParentRoute>
                </Routes>
            </ProvideServices>
        </Router>

        <Toaster toasts=toasts />
    }
}

/// Wires the browser-backed services into context.
///
/// Lives inside `<Router>` because navigation needs the router.
#[component]
fn ProvideServices(toasts: Toasts, children: Children) -> impl IntoView {
    provide_context(Services {
        reviews: Arc::new(HttpReviewSource::new(ClientConfig::from_build_env())),
        notifier: Arc::new(toasts),
        navigator: Arc::new(RouterNavigator::from_router()),
        viewport: Arc::new(DomViewport),
    });

    children()
}

/// Shared chrome around every page
#[component]
fn HomeLayout() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <a href="/" class="text-xl font-bold text-gray-900">{APP_TITLE}</a>
                    <nav class="text-sm text-gray-600">
                        <a href=REVIEW_LIST_PATH class="hover:text-gray-900">"내 리뷰"</a>
                    </nav>
                </div>
            </header>

            <main class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8 flex gap-5">
                <Outlet />
            </main>
        </div>
    }
}

/// Landing placeholder
#[component]
fn Home() -> impl IntoView {
    view! {
        <div class="w-full text-center py-16 text-gray-500">
            <a href=REVIEW_LIST_PATH class="text-blue-600 hover:underline">"내 리뷰 보기"</a>
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"페이지를 찾을 수 없습니다"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "홈으로"
                </a>
            </div>
        </div>
    }
}
