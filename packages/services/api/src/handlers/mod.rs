//! HTTP 핸들러

pub mod document_fields;
pub mod document_type;
pub mod export;
pub mod health;

use serde::Serialize;

/// 공통 성공 응답
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// 항상 `false` (에러 응답과 같은 키)
    pub error: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            error: false,
            message: None,
            data,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            error: false,
            message: Some(message.into()),
            data,
        }
    }
}
