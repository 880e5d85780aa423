//! 공통 에러 타입
//!
//! Edulab 전체에서 사용되는 에러 타입을 정의합니다.
//! 스토리지(DB) 에러는 여기 포함되지 않으며, 서비스 경계에서 별도로 매핑됩니다.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Edulab 공통 에러
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Validation Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("invalid identifier: {name}")]
    InvalidIdentifier { name: String },

    #[error("invalid field type: {type_name}")]
    InvalidFieldType { type_name: String },

    #[error("Invalid export type: {value}")]
    InvalidExportType { value: String },

    #[error("selected fields are required for export type '{export_type}'")]
    SelectionRequired { export_type: String },

    #[error("invalid fields selected: {}", .fields.join(", "))]
    InvalidFields { fields: Vec<String> },

    #[error("field already exists: {name}")]
    DuplicateField { name: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Lookup Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("document type not found: {name}")]
    DocumentTypeNotFound { name: String },
}

impl Error {
    /// HTTP 상태 코드로 변환
    pub fn status_code(&self) -> u16 {
        match self {
            // 404 Not Found
            Error::DocumentTypeNotFound { .. } => 404,

            // 400 Bad Request
            _ => 400,
        }
    }

    /// 에러 코드 (클라이언트용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::MissingField { .. } => "MISSING_FIELD",
            Error::InvalidIdentifier { .. } => "INVALID_IDENTIFIER",
            Error::InvalidFieldType { .. } => "INVALID_FIELD_TYPE",
            Error::InvalidExportType { .. } => "INVALID_EXPORT_TYPE",
            Error::SelectionRequired { .. } => "SELECTION_REQUIRED",
            Error::InvalidFields { .. } => "INVALID_FIELDS",
            Error::DuplicateField { .. } => "DUPLICATE_FIELD",
            Error::DocumentTypeNotFound { .. } => "NOT_FOUND",
        }
    }

    /// 필수 값 누락 에러 생성 헬퍼
    pub fn missing(field: impl Into<String>) -> Self {
        Error::MissingField {
            field: field.into(),
        }
    }
}
