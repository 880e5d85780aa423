//! 스키마 저장소
//!
//! SQLite 파일 하나에 고정 테이블 `document_type`과, 문서 타입마다 미리
//! 준비된 테이블이 들어 있습니다. 문서 타입 테이블의 필드 목록은 SQLite
//! 메타데이터(`sqlite_master`, `pragma_table_info`)에서 직접 읽습니다.

use base64::{engine::general_purpose, Engine as _};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Row, SqlitePool, TypeInfo, ValueRef};

use edulab_core::document::{DocumentType, NewDocumentType};
use edulab_core::schema::{
    is_reserved_table, table_name_for, DocumentField, DocumentTable, FieldDefinition,
};
use edulab_sql::AddColumnBuilder;

use crate::config::Config;
use crate::error::{ApiError, Result};

#[derive(Clone)]
pub struct SchemaStore {
    pool: SqlitePool,
}

#[derive(Debug, sqlx::FromRow)]
struct DocumentTypeRow {
    id: i64,
    document_name: String,
    #[sqlx(rename = "type")]
    doc_type: String,
}

impl From<DocumentTypeRow> for DocumentType {
    fn from(row: DocumentTypeRow) -> Self {
        DocumentType {
            id: row.id,
            document_name: row.document_name,
            doc_type: row.doc_type,
        }
    }
}

impl SchemaStore {
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        if let Some(parent) = config.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&config.db_path)
            .create_if_missing(config.create_db);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS document_type (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                document_name TEXT NOT NULL,
                type TEXT NOT NULL
            )"#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// 커넥션 풀 종료
    pub async fn close(&self) {
        self.pool.close().await;
    }

    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Document types
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn list_document_types(&self) -> Result<Vec<DocumentType>> {
        let rows = sqlx::query_as::<_, DocumentTypeRow>(
            r#"SELECT id, document_name, type FROM document_type ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DocumentType::from).collect())
    }

    pub async fn insert_document_type(&self, new: &NewDocumentType) -> Result<DocumentType> {
        let result = sqlx::query(r#"INSERT INTO document_type (document_name, type) VALUES (?1, ?2)"#)
            .bind(&new.document_name)
            .bind(&new.doc_type)
            .execute(&self.pool)
            .await?;

        Ok(DocumentType {
            id: result.last_insert_rowid(),
            document_name: new.document_name.clone(),
            doc_type: new.doc_type.clone(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Field catalog
    // ─────────────────────────────────────────────────────────────────────────

    /// 표시 이름으로 문서 타입 테이블 조회
    ///
    /// 도출한 테이블 이름이 `sqlite_master`에 없거나 예약된 이름이면
    /// `DocumentTypeNotFound`입니다.
    pub async fn resolve_table(&self, display_name: &str) -> Result<DocumentTable> {
        let not_found = || {
            ApiError::Core(edulab_core::Error::DocumentTypeNotFound {
                name: display_name.to_string(),
            })
        };

        let derived = table_name_for(display_name);
        if is_reserved_table(&derived) {
            return Err(not_found());
        }

        let name: Option<String> = sqlx::query_scalar(
            r#"SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1 COLLATE NOCASE"#,
        )
        .bind(&derived)
        .fetch_optional(&self.pool)
        .await?;

        let Some(name) = name else {
            return Err(not_found());
        };

        let fields = self.table_fields(&name).await?;
        Ok(DocumentTable::new(name, fields))
    }

    async fn table_fields(&self, table: &str) -> Result<Vec<DocumentField>> {
        let rows = sqlx::query_as::<_, (i64, String, String)>(
            r#"SELECT cid, name, type FROM pragma_table_info(?1) ORDER BY cid"#,
        )
        .bind(table)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(cid, name, field_type)| DocumentField {
                field_id: cid + 1,
                field_name: name,
                field_type,
            })
            .collect())
    }

    /// 문서 타입 테이블에 컬럼 추가
    pub async fn add_field(
        &self,
        display_name: &str,
        field: &FieldDefinition,
    ) -> Result<DocumentField> {
        let table = self.resolve_table(display_name).await?;
        let duplicate = || {
            ApiError::Core(edulab_core::Error::DuplicateField {
                name: field.name.clone(),
            })
        };

        if field.conflicts_with(&table.fields) {
            return Err(duplicate());
        }

        let sql = AddColumnBuilder::new(&table).build(field);
        tracing::debug!("Executing DDL: {}", sql);

        match sqlx::query(&sql).persistent(false).execute(&self.pool).await {
            Ok(_) => {}
            // 동시에 같은 컬럼을 추가한 경우
            Err(sqlx::Error::Database(e)) if e.message().contains("duplicate column name") => {
                return Err(duplicate());
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(
            table = %table.name,
            field = %field.name,
            field_type = %field.field_type,
            "Field added"
        );

        let refreshed = self.table_fields(&table.name).await?;
        let added = DocumentTable::new(table.name.clone(), refreshed)
            .find_field(&field.name)
            .cloned();
        added.ok_or_else(|| ApiError::Internal {
            message: format!("Field {} missing after ALTER TABLE {}", field.name, table.name),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────────────────────

    /// 생성된 SELECT 실행 후 행을 JSON 객체로 변환
    pub async fn fetch_rows(&self, sql: &str) -> Result<Vec<Value>> {
        tracing::debug!("Executing query: {}", sql);
        // 동적 SQL은 커넥션별 statement 캐시에 남기지 않음
        let rows = sqlx::query(sql).persistent(false).fetch_all(&self.pool).await?;
        Ok(rows_to_json(rows))
    }
}

fn rows_to_json(rows: Vec<SqliteRow>) -> Vec<Value> {
    rows.into_iter().map(row_to_json).collect()
}

/// SQLite 값의 실제 저장 타입에 따라 JSON으로 변환 (BLOB은 base64 문자열)
fn row_to_json(row: SqliteRow) -> Value {
    let mut obj = serde_json::Map::new();
    for column in row.columns() {
        let idx = column.ordinal();
        let type_name = match row.try_get_raw(idx) {
            Ok(raw) if !raw.is_null() => raw.type_info().name().to_ascii_uppercase(),
            _ => "NULL".to_string(),
        };

        let value = match type_name.as_str() {
            "NULL" => None,
            "INTEGER" | "INT8" | "BIGINT" | "BOOLEAN" => row
                .try_get_unchecked::<i64, _>(idx)
                .ok()
                .map(|v| Value::Number(v.into())),
            "REAL" | "FLOAT" | "DOUBLE" => row
                .try_get_unchecked::<f64, _>(idx)
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number),
            "BLOB" => row
                .try_get_unchecked::<Vec<u8>, _>(idx)
                .ok()
                .map(|v| Value::String(general_purpose::STANDARD.encode(v))),
            _ => row
                .try_get_unchecked::<String, _>(idx)
                .ok()
                .map(Value::String),
        }
        .unwrap_or(Value::Null);

        obj.insert(column.name().to_string(), value);
    }
    Value::Object(obj)
}
