// fixtures/mod.rs - Sample review API payloads
//
// Tests across the crate decode and render the same responses, so the
// payloads live here once instead of being retyped in every test.

use crate::web_app::model::{PageInfo, Review, ReviewPage};

/// A second page of three reviews, with a previous page but no next one
pub const REVIEW_PAGE_JSON: &str = r#"{
    "reviewList": [
        {
            "review_id": 31,
            "product_name": "무선 키보드",
            "review_content": "타건감이 좋아요",
            "rate": 5,
            "review_reg_time": "2023-03-05T10:00:00Z"
        },
        {
            "review_id": 30,
            "product_name": "USB-C 케이블",
            "review_content": "금방 끊어졌어요",
            "rate": 2,
            "review_reg_time": "2023-02-28T23:30:00Z"
        },
        {
            "review_id": "29",
            "product_name": "모니터 암",
            "review_content": "설치가 쉬워요",
            "rate": 4.5,
            "review_reg_time": "2023-01-15T08:12:45Z"
        }
    ],
    "pageInfo": {
        "currentPageNumber": 2,
        "startPageNumber": 1,
        "endPageNumber": 2,
        "prevPageNumber": 1
    }
}"#;

/// A member with no reviews at all
pub const EMPTY_PAGE_JSON: &str = r#"{
    "reviewList": [],
    "pageInfo": {
        "currentPageNumber": 1,
        "startPageNumber": 1,
        "endPageNumber": 1
    }
}"#;

pub fn review(id: &str, product_name: &str, rate: f64, review_reg_time: &str) -> Review {
    Review {
        review_id: id.to_string(),
        product_name: product_name.to_string(),
        review_content: format!("{product_name} 후기"),
        rate,
        review_reg_time: review_reg_time.to_string(),
    }
}

/// Window `start..=end` positioned at `current`, with neighbours where they exist
pub fn page_info(current: u32, start: u32, end: u32, last_page: u32) -> PageInfo {
    PageInfo {
        current_page_number: current,
        start_page_number: start,
        end_page_number: end,
        prev_page_number: (current > 1).then(|| current - 1),
        next_page_number: (current < last_page).then(|| current + 1),
    }
}

pub fn review_page(reviews: Vec<Review>, page_info: Option<PageInfo>) -> ReviewPage {
    ReviewPage {
        review_list: reviews,
        page_info,
    }
}
