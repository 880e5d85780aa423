use axum::Json;
use serde_json::{json, Value};

use crate::handlers::ApiResponse;

pub async fn health_check() -> Json<ApiResponse<Value>> {
    Json(ApiResponse::ok(json!({ "ok": true })))
}
