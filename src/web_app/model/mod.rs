// web_app/model/mod.rs - Wire types returned by the review API
//
// These structs mirror the JSON produced by `GET /api/review/my`.
// Review fields are snake_case on the wire, the envelope and page info
// are camelCase.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::web_app::error::FetchError;

/// One review written by the current member
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Opaque id; the backend may send it as a number or a string
    #[serde(deserialize_with = "opaque_id")]
    pub review_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub review_content: String,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub review_reg_time: String,
}

/// Server-computed pagination window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page_number: u32,
    pub start_page_number: u32,
    pub end_page_number: u32,
    #[serde(default)]
    pub prev_page_number: Option<u32>,
    #[serde(default)]
    pub next_page_number: Option<u32>,
}

impl PageInfo {
    /// Page numbers to render as buttons, `start..=end`.
    ///
    /// A reversed window yields an empty range.
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<u32> {
        self.start_page_number..=self.end_page_number
    }

    pub fn is_current(&self, page: u32) -> bool {
        page == self.current_page_number
    }
}

/// Response envelope of the review listing endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPage {
    #[serde(default)]
    pub review_list: Vec<Review>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

impl ReviewPage {
    /// Decode a success body.
    ///
    /// Fails closed: a missing or malformed `reviewList` becomes an empty
    /// list and a missing or malformed `pageInfo` becomes `None`. Only a body
    /// that is not a JSON object at all is reported as an error.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

        let Value::Object(mut fields) = value else {
            return Err(FetchError::Decode("response body is not a JSON object".to_string()));
        };

        let review_list = fields
            .remove("reviewList")
            .and_then(|v| serde_json::from_value::<Vec<Review>>(v).ok())
            .unwrap_or_default();

        let page_info = fields
            .remove("pageInfo")
            .and_then(|v| serde_json::from_value::<Option<PageInfo>>(v).ok())
            .flatten();

        Ok(Self {
            review_list,
            page_info,
        })
    }
}

fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}
