//! 문서 타입 레코드
//!
//! `document_type` 테이블의 한 행과, 생성 요청의 검증된 형태를 정의합니다.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::table_name_for;

/// 등록된 문서 타입 (`document_type` 테이블의 한 행)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentType {
    pub id: i64,
    pub document_name: String,
    #[serde(rename = "type")]
    pub doc_type: String,
}

impl DocumentType {
    /// 이 문서 타입의 필드가 저장된 테이블 이름
    pub fn table_name(&self) -> String {
        table_name_for(&self.document_name)
    }
}

/// 검증된 문서 타입 생성 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocumentType {
    pub document_name: String,
    pub doc_type: String,
}

impl NewDocumentType {
    /// 요청 값 검증
    ///
    /// 두 값 모두 필수이며, 앞뒤 공백을 제거한 뒤 비어있으면 거부합니다.
    pub fn new(document_name: Option<&str>, doc_type: Option<&str>) -> Result<Self> {
        let document_name = required("documentName", document_name)?;
        let doc_type = required("type", doc_type)?;
        Ok(Self {
            document_name,
            doc_type,
        })
    }
}

fn required(field: &str, value: Option<&str>) -> Result<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::missing(field))
}
