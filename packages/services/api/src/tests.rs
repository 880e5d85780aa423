//! 라우터 단위 테스트
//!
//! 임시 SQLite 파일에 `health_care`(8행), `empty_forms`(0행) 테이블을 미리
//! 만들어 두고 실제 `Router`에 요청을 보냅니다.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::config::Config;
use crate::create_router;
use crate::state::AppState;

struct TestApp {
    router: Router,
    state: Arc<AppState>,
    _dir: TempDir,
}

async fn setup() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        port: 0,
        db_path: dir.path().join("data").join("edulab-test.db"),
        db_max_connections: 1,
        create_db: true,
    };
    let state = Arc::new(AppState::new(&config).await.unwrap());
    let pool = state.store.pool();

    sqlx::query(
        "CREATE TABLE health_care (id INTEGER PRIMARY KEY AUTOINCREMENT, patient_name TEXT, age INTEGER)",
    )
    .execute(pool)
    .await
    .unwrap();
    for i in 1..=8 {
        sqlx::query("INSERT INTO health_care (patient_name, age) VALUES (?1, ?2)")
            .bind(format!("patient {}", i))
            .bind(20 + i)
            .execute(pool)
            .await
            .unwrap();
    }
    sqlx::query("CREATE TABLE empty_forms (id INTEGER PRIMARY KEY, title TEXT)")
        .execute(pool)
        .await
        .unwrap();

    TestApp {
        router: create_router(state.clone()),
        state,
        _dir: dir,
    }
}

impl TestApp {
    async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(req).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }
}

fn names(fields: &Value) -> Vec<String> {
    fields
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field_name"].as_str().unwrap().to_string())
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Document types
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_then_list_document_type() {
    let app = setup().await;

    let (status, body) = app
        .post(
            "/document-type",
            json!({"documentName": "Health Care", "type": "medical"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["error"], false);
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app.get("/document-type").await;
    assert_eq!(status, StatusCode::OK);
    let matches: Vec<&Value> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|d| d["id"].as_i64() == Some(id))
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["document_name"], "Health Care");
    assert_eq!(matches[0]["type"], "medical");
}

#[tokio::test]
async fn test_create_document_type_requires_fields() {
    let app = setup().await;

    let (status, body) = app
        .post("/document-type", json!({"documentName": "Customer"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "MISSING_FIELD");

    let (_, body) = app.get("/document-type").await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_malformed_json_uses_error_envelope() {
    let app = setup().await;

    let req = Request::builder()
        .method("POST")
        .uri("/document-type")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = app.send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["requestId"].is_string());
}

// ─────────────────────────────────────────────────────────────────────────────
// Document fields
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_fields_from_table_metadata() {
    let app = setup().await;

    let (status, body) = app
        .get("/document-fields?documentType=Health%20Care")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tableName"], "health_care");
    assert_eq!(names(&body["data"]), vec!["id", "patient_name", "age"]);
    assert_eq!(body["data"][0]["field_id"], 1);
    assert_eq!(body["data"][2]["field_id"], 3);
    assert_eq!(body["data"][2]["field_type"], "INTEGER");
}

#[tokio::test]
async fn test_list_fields_unknown_document_type() {
    let app = setup().await;

    let (status, body) = app.get("/document-fields?documentType=Unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], true);

    // 레지스트리 테이블은 문서 타입이 아님
    let (status, _) = app
        .get("/document-fields?documentType=Document%20Type")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/document-fields").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_field_then_list_includes_it() {
    let app = setup().await;

    let (status, body) = app
        .post(
            "/document-fields",
            json!({"documentType": "Health Care", "field_name": "blood_group", "field_type": "varchar(3)"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["field_id"], 4);
    assert_eq!(body["data"]["field_type"], "VARCHAR(3)");

    let (_, body) = app
        .get("/document-fields?documentType=Health%20Care")
        .await;
    assert!(names(&body["data"]).contains(&"blood_group".to_string()));
}

#[tokio::test]
async fn test_add_field_rejections() {
    let app = setup().await;

    let (status, body) = app
        .post(
            "/document-fields",
            json!({"documentType": "Health Care", "fieldName": "PATIENT_NAME", "fieldType": "TEXT"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DUPLICATE_FIELD");

    let (status, _) = app
        .post(
            "/document-fields",
            json!({"documentType": "Nope", "field_name": "x", "field_type": "TEXT"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .post(
            "/document-fields",
            json!({"documentType": "Health Care", "field_name": "x", "field_type": "TEXT; DROP TABLE health_care"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FIELD_TYPE");

    let (status, _) = app
        .post(
            "/document-fields",
            json!({"documentType": "Health Care", "field_type": "TEXT"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app
        .get("/document-fields?documentType=Health%20Care")
        .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_add_field_rejects_constraint_clauses() {
    let app = setup().await;

    for field_type in [
        "TEXT NOT NULL",
        "INTEGER PRIMARY KEY",
        "TEXT UNIQUE",
        "TEXT DEFAULT abc",
    ] {
        let (status, body) = app
            .post(
                "/document-fields",
                json!({"documentType": "Health Care", "field_name": "extra", "field_type": field_type}),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "type: {field_type}");
        assert_eq!(body["code"], "INVALID_FIELD_TYPE");
    }

    let (_, body) = app
        .get("/document-fields?documentType=Health%20Care")
        .await;
    assert!(!names(&body["data"]).contains(&"extra".to_string()));
}

#[tokio::test]
async fn test_add_field_document_type_from_query() {
    let app = setup().await;

    let (status, _) = app
        .post(
            "/document-fields?documentType=Empty%20Forms",
            json!({"field_name": "due_date", "field_type": "TEXT"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

// ─────────────────────────────────────────────────────────────────────────────
// Export
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_export_template() {
    let app = setup().await;

    let (status, body) = app
        .get("/export-data?documentType=Health%20Care&exportType=template")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!([{"id": ""}, {"patient_name": ""}, {"age": ""}])
    );

    let (_, body) = app
        .get("/export-data?documentType=Health%20Care&exportType=template&selectedFields=age")
        .await;
    assert_eq!(body["data"], json!([{"age": ""}]));
}

#[tokio::test]
async fn test_export_five_records() {
    let app = setup().await;

    let (status, body) = app
        .get("/export-data?documentType=Health%20Care&exportType=5records")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 5);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_export_all_and_filtered() {
    let app = setup().await;

    let (_, body) = app
        .get("/export-data?documentType=Health%20Care&exportType=all")
        .await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0]["patient_name"], "patient 1");
    assert_eq!(rows[0]["age"], 21);

    let (status, body) = app
        .get("/export-data?documentType=Health%20Care&exportType=filtered&selectedFields=age,%20patient_name")
        .await;
    assert_eq!(status, StatusCode::OK);
    let row = body["data"][0].as_object().unwrap();
    assert_eq!(row.len(), 2);
    assert!(row.contains_key("age"));
    assert!(row.contains_key("patient_name"));

    let (status, body) = app
        .get("/export-data?documentType=Health%20Care&exportType=filtered")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "SELECTION_REQUIRED");
}

#[tokio::test]
async fn test_export_invalid_selected_fields() {
    let app = setup().await;

    let (status, body) = app
        .get("/export-data?documentType=Health%20Care&exportType=all&selectedFields=id,salary,age,ward")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["invalidFields"], json!(["salary", "ward"]));
}

#[tokio::test]
async fn test_export_validation_errors() {
    let app = setup().await;

    let (status, body) = app
        .get("/export-data?documentType=Health%20Care&exportType=csv")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_EXPORT_TYPE");

    // 내보내기 모드 검증이 테이블 조회보다 먼저
    let (status, _) = app
        .get("/export-data?documentType=Unknown&exportType=csv")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .get("/export-data?documentType=Unknown&exportType=all")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_export_empty_table() {
    let app = setup().await;

    let (status, body) = app
        .get("/export-data?documentType=Empty%20Forms&exportType=all")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["count"], 0);
    assert_eq!(body["message"], "No records found");
}

// ─────────────────────────────────────────────────────────────────────────────
// Misc
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health_and_request_id_header() {
    let app = setup().await;

    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], false);
    assert_eq!(body["data"]["ok"], true);
}

#[tokio::test]
async fn test_database_error_is_redacted() {
    let app = setup().await;

    sqlx::query("DROP TABLE document_type")
        .execute(app.state.store.pool())
        .await
        .unwrap();

    let (status, body) = app.get("/document-type").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "DATABASE_ERROR");
    assert_eq!(body["message"], "Database operation failed");
    assert!(body.get("details").is_none());
    assert!(!body.to_string().contains("no such table"));
}

#[tokio::test]
async fn test_export_blob_as_base64() {
    let app = setup().await;
    let pool = app.state.store.pool();

    sqlx::query("CREATE TABLE attachments (id INTEGER PRIMARY KEY, payload BLOB)")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO attachments (payload) VALUES (?1)")
        .bind(vec![0x00u8, 0xff, 0x10])
        .execute(pool)
        .await
        .unwrap();

    let (status, body) = app
        .get("/export-data?documentType=Attachments&exportType=all")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["payload"], "AP8Q");
}
