// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, Card)
// - toast.rs: Notification toasts and their store
// - pagination.rs: Pagination and page buttons
// - review.rs: Review table

pub mod common;
pub mod toast;
pub mod pagination;
pub mod review;

// Re-export commonly used components for convenience
pub use common::*;
pub use toast::*;
pub use pagination::*;
pub use review::*;
