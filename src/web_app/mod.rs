// web_app/mod.rs - Root module for the Leptos storefront application
//
// Architecture:
// - model/: Wire types returned by the review API
// - query.rs: Query-string handling (the page number lives in the URL)
// - error.rs: Fetch errors and their mapping to notifications
// - format.rs: Display formatting (registration dates)
// - paging.rs: Pagination button layout
// - config.rs: Client-side settings and fixed paths
// - services.rs: Collaborator traits (notifier, navigator, viewport)
// - api/: Review API client
// - state.rs: Review list fetch lifecycle, free of any UI runtime
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - browser.rs: Router- and DOM-backed collaborator implementations
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod query;
pub mod error;
pub mod format;
pub mod paging;
pub mod config;
pub mod services;
pub mod api;
pub mod state;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod browser;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
