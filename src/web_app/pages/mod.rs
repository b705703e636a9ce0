// web_app/pages/mod.rs - Page components module
//
// - MemberReviewPage: the member's own reviews, paginated
// - ReviewDetail: nested detail route of a review (placeholder)

pub mod review;
pub mod review_detail;

// Re-export page components
pub use review::MemberReviewPage;
pub use review_detail::ReviewDetail;
