//! `/document-fields` 핸들러
//!
//! 필드 목록은 문서 타입 테이블의 컬럼 메타데이터에서 읽고, 필드 추가는
//! 해당 테이블에 컬럼을 추가합니다.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use edulab_core::schema::{DocumentField, FieldDefinition};
use edulab_core::Error;

use crate::error::Result;
use crate::handlers::ApiResponse;
use crate::state::AppState;

/// `?documentType=` 쿼리
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTypeQuery {
    #[serde(default)]
    pub document_type: Option<String>,
}

/// 필드 추가 요청 본문
#[derive(Debug, Deserialize)]
pub struct AddFieldRequest {
    /// 생략 시 쿼리 스트링의 `documentType` 사용
    #[serde(default, rename = "documentType")]
    pub document_type: Option<String>,

    #[serde(default, alias = "fieldName")]
    pub field_name: Option<String>,

    #[serde(default, alias = "fieldType")]
    pub field_type: Option<String>,
}

/// 필드 목록 응답
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldListResponse {
    pub error: bool,
    pub document_type: String,
    pub table_name: String,
    pub data: Vec<DocumentField>,
}

/// 표시 이름은 테이블 이름 규칙에 그대로 들어가므로 공백을 자르지 않습니다.
fn require_document_type(value: Option<String>) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::missing("documentType").into())
}

/// GET /document-fields?documentType=
pub async fn list(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<DocumentTypeQuery>, QueryRejection>,
) -> Result<Json<FieldListResponse>> {
    let Query(query) = query?;
    let document_type = require_document_type(query.document_type)?;

    let table = state.store.resolve_table(&document_type).await?;

    Ok(Json(FieldListResponse {
        error: false,
        document_type,
        table_name: table.name,
        data: table.fields,
    }))
}

/// POST /document-fields
pub async fn add(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<DocumentTypeQuery>, QueryRejection>,
    payload: std::result::Result<Json<AddFieldRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<DocumentField>>)> {
    let Query(query) = query?;
    let Json(req) = payload?;

    let document_type = require_document_type(req.document_type.or(query.document_type))?;
    let definition = FieldDefinition::new(req.field_name.as_deref(), req.field_type.as_deref())?;

    let field = state.store.add_field(&document_type, &definition).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(field, "Field added")),
    ))
}
