//! 문서 타입 테이블

use serde::Serialize;

use super::field::DocumentField;

/// 메타데이터로 존재가 확인된 문서 타입 테이블
///
/// 이 타입의 값은 스키마 저장소에서 조회해서만 만들어지므로, `name`과
/// `fields`의 이름은 SQL 식별자로 사용해도 되는 허용 목록입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentTable {
    /// 실제 테이블 이름
    pub name: String,

    /// 컬럼 위치 순서의 필드 목록
    pub fields: Vec<DocumentField>,
}

impl DocumentTable {
    pub fn new(name: impl Into<String>, fields: Vec<DocumentField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// 컬럼 이름 목록 (위치 순서)
    pub fn column_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field_name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.field_name == name)
    }

    pub fn find_field(&self, name: &str) -> Option<&DocumentField> {
        self.fields
            .iter()
            .find(|f| f.field_name.eq_ignore_ascii_case(name))
    }
}
