//! 필드(컬럼) 정의

use serde::{Deserialize, Serialize};

use super::naming::is_valid_identifier;
use super::types::FieldType;
use crate::error::{Error, Result};

/// 문서 타입의 필드
///
/// 테이블 메타데이터에서 읽은 컬럼 하나에 대응합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentField {
    /// 1부터 시작하는 컬럼 위치
    pub field_id: i64,

    /// 컬럼 이름
    pub field_name: String,

    /// 선언 타입 (선언이 없으면 빈 문자열)
    pub field_type: String,
}

/// 검증된 필드 추가 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub field_type: FieldType,
}

impl FieldDefinition {
    pub fn new(field_name: Option<&str>, field_type: Option<&str>) -> Result<Self> {
        let name = field_name
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::missing("field_name"))?;
        let raw_type = field_type
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::missing("field_type"))?;

        if !is_valid_identifier(name) {
            return Err(Error::InvalidIdentifier {
                name: name.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            field_type: FieldType::parse(raw_type)?,
        })
    }

    /// 기존 필드 목록에 같은 이름이 있는지 (SQLite 컬럼 이름은 대소문자 무시)
    pub fn conflicts_with(&self, existing: &[DocumentField]) -> bool {
        existing
            .iter()
            .any(|f| f.field_name.eq_ignore_ascii_case(&self.name))
    }
}
