// web_app/api/mod.rs - Review API client
//
// The backend is an external service; this module only knows how to call
// its review listing endpoint and turn the answer into a `ReviewPage`.

pub mod reviews;

pub use reviews::{HttpReviewSource, ReviewSource};
