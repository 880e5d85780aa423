//! `/document-type` 핸들러

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use edulab_core::document::{DocumentType, NewDocumentType};

use crate::error::Result;
use crate::handlers::ApiResponse;
use crate::state::AppState;

/// 문서 타입 생성 요청 본문
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentTypeRequest {
    #[serde(default)]
    pub document_name: Option<String>,

    #[serde(default, rename = "type")]
    pub doc_type: Option<String>,
}

/// GET /document-type
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse<Vec<DocumentType>>>> {
    let docs = state.store.list_document_types().await?;
    Ok(Json(ApiResponse::ok(docs)))
}

/// POST /document-type
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateDocumentTypeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<DocumentType>>)> {
    let Json(req) = payload?;
    let new = NewDocumentType::new(req.document_name.as_deref(), req.doc_type.as_deref())?;

    let doc = state.store.insert_document_type(&new).await?;
    tracing::info!(id = doc.id, name = %doc.document_name, "Document type added");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(doc, "Document type added")),
    ))
}
