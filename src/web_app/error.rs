// web_app/error.rs - Fetch errors and what the user sees for them
//
// Every failure of the review fetch ends up as exactly one toast. Only an
// expired session additionally moves the user (to the login page).

use thiserror::Error;

use crate::web_app::services::{NotifyLevel, Notification};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Backend answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// 2xx response whose body could not be read as a review page
    #[error("invalid response: {0}")]
    Decode(String),
}

/// The three outcomes a failed fetch can have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// HTTP 401
    SessionExpired,
    /// HTTP 5xx
    ServerFault,
    /// Everything else, including transport failures
    Other,
}

impl FetchError {
    /// Build a status error from a response body.
    ///
    /// JSON string bodies are unquoted and JSON objects contribute their
    /// `message` field; anything else is used as plain text. An empty body
    /// falls back to the status code.
    pub fn from_response(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::String(text)) => text,
            Ok(serde_json::Value::Object(fields)) => fields
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| body.to_string()),
            _ => body.to_string(),
        };

        let message = if message.is_empty() {
            format!("HTTP {status}")
        } else {
            message
        };

        FetchError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.status() {
            Some(401) => ErrorKind::SessionExpired,
            Some(status) if (500..600).contains(&status) => ErrorKind::ServerFault,
            _ => ErrorKind::Other,
        }
    }
}

pub const SESSION_EXPIRED_TITLE: &str = "세션이 만료되었습니다";
pub const SESSION_EXPIRED_DESCRIPTION: &str = "재로그인 후 시도해주세요";
pub const SERVER_FAULT_TITLE: &str = "Internal Server Error";
pub const SERVER_FAULT_DESCRIPTION: &str = "백엔드 코드를 점검해주세요";
pub const OTHER_ERROR_DESCRIPTION: &str = "리뷰 불러오는 도중 에러 발생, 관리자에게 문의하세요";

impl Notification {
    /// Toast shown for a failed review fetch
    pub fn for_error(error: &FetchError) -> Self {
        match error.kind() {
            ErrorKind::SessionExpired => Notification::new(
                NotifyLevel::Warning,
                SESSION_EXPIRED_TITLE,
                SESSION_EXPIRED_DESCRIPTION,
            ),
            ErrorKind::ServerFault => Notification::new(
                NotifyLevel::Error,
                SERVER_FAULT_TITLE,
                SERVER_FAULT_DESCRIPTION,
            ),
            ErrorKind::Other => {
                Notification::new(NotifyLevel::Error, error.to_string(), OTHER_ERROR_DESCRIPTION)
            }
        }
    }
}
