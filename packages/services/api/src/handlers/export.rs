//! `/export-data` 핸들러

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use edulab_core::export::{template_rows, ExportType};
use edulab_sql::{ExportParams, SelectBuilder};

use crate::error::Result;
use crate::state::AppState;

/// 내보내기 응답
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub error: bool,
    pub document_type: String,
    pub export_type: ExportType,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Vec<Value>,
}

/// GET /export-data?documentType=&exportType=&selectedFields=
pub async fn export_data(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<ExportParams>, QueryRejection>,
) -> Result<Json<ExportResponse>> {
    let Query(params) = params?;
    // DB 호출 전 검증
    let request = params.into_request()?;

    let table = state.store.resolve_table(&request.document_type).await?;
    if let Some(selected) = &request.selected {
        selected.validate(&table)?;
    }

    let data = if request.export_type.reads_rows() {
        let sql = SelectBuilder::new(&table)
            .build(request.selected.as_ref(), request.export_type.row_limit());
        state.store.fetch_rows(&sql).await?
    } else {
        match &request.selected {
            Some(selected) => template_rows(selected.iter()),
            None => template_rows(table.column_names()),
        }
    };

    let message = data.is_empty().then(|| "No records found".to_string());

    Ok(Json(ExportResponse {
        error: false,
        document_type: request.document_type,
        export_type: request.export_type,
        count: data.len(),
        message,
        data,
    }))
}
