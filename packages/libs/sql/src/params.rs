//! 내보내기 요청 파라미터
//!
//! `/export-data` 쿼리 스트링을 파싱하고, DB 호출 전에 가능한 검증을 모두
//! 수행합니다.

use serde::{Deserialize, Serialize};

use edulab_core::export::ExportType;
use edulab_core::schema::DocumentTable;
use edulab_core::{Error, Result};

/// `/export-data` 쿼리 파라미터 (원본 그대로)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportParams {
    /// 문서 타입 표시 이름
    #[serde(default)]
    pub document_type: Option<String>,

    /// `all` | `filtered` | `5records` | `template`
    #[serde(default)]
    pub export_type: Option<String>,

    /// 쉼표로 구분된 컬럼 목록
    #[serde(default)]
    pub selected_fields: Option<String>,
}

/// 검증된 내보내기 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub document_type: String,
    pub export_type: ExportType,
    pub selected: Option<SelectedFields>,
}

impl ExportParams {
    /// 필수 값, 내보내기 모드, 선택 컬럼 필요 여부 검증
    pub fn into_request(self) -> Result<ExportRequest> {
        let document_type = self
            .document_type
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::missing("documentType"))?;

        let export_type: ExportType = self
            .export_type
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::missing("exportType"))?
            .parse()?;

        let selected = self.selected_fields.as_deref().and_then(SelectedFields::parse);

        if export_type.requires_selection() && selected.is_none() {
            return Err(Error::SelectionRequired {
                export_type: export_type.to_string(),
            });
        }

        Ok(ExportRequest {
            document_type,
            export_type,
            selected,
        })
    }
}

/// 선택 컬럼 목록
///
/// 공백을 제거하고, 빈 항목은 버리며, 중복은 처음 등장 순서로 합칩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFields(Vec<String>);

impl SelectedFields {
    /// 쉼표 구분 문자열 파싱 (항목이 없으면 None)
    pub fn parse(raw: &str) -> Option<Self> {
        let mut fields: Vec<String> = Vec::new();
        for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !fields.iter().any(|f| f == name) {
                fields.push(name.to_string());
            }
        }

        if fields.is_empty() {
            None
        } else {
            Some(Self(fields))
        }
    }

    /// 테이블 컬럼과 대조
    ///
    /// 존재하지 않는 이름을 모두 모아 `InvalidFields`로 반환합니다.
    pub fn validate(&self, table: &DocumentTable) -> Result<()> {
        let invalid: Vec<String> = self
            .0
            .iter()
            .filter(|name| !table.has_column(name))
            .cloned()
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidFields { fields: invalid })
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edulab_core::schema::DocumentField;

    fn table() -> DocumentTable {
        let fields = ["id", "patient_name", "age"]
            .iter()
            .enumerate()
            .map(|(i, name)| DocumentField {
                field_id: i as i64 + 1,
                field_name: name.to_string(),
                field_type: String::new(),
            })
            .collect();
        DocumentTable::new("health_care", fields)
    }

    fn params(doc: Option<&str>, kind: Option<&str>, fields: Option<&str>) -> ExportParams {
        ExportParams {
            document_type: doc.map(str::to_string),
            export_type: kind.map(str::to_string),
            selected_fields: fields.map(str::to_string),
        }
    }

    #[test]
    fn test_selected_fields_parsing() {
        let fields = SelectedFields::parse(" age, ,patient_name,age ").unwrap();
        assert_eq!(fields.iter().collect::<Vec<_>>(), vec!["age", "patient_name"]);
        assert!(SelectedFields::parse(" , ").is_none());
        assert!(SelectedFields::parse("").is_none());
    }

    #[test]
    fn test_selected_fields_validation_lists_invalid_names() {
        let table = table();
        assert!(SelectedFields::parse("id,age").unwrap().validate(&table).is_ok());

        let err = SelectedFields::parse("id,salary,age,ward")
            .unwrap()
            .validate(&table)
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidFields {
                fields: vec!["salary".to_string(), "ward".to_string()]
            }
        );
    }

    #[test]
    fn test_export_params_validation() {
        let req = params(Some("Health Care"), Some("5records"), None)
            .into_request()
            .unwrap();
        assert_eq!(req.export_type, ExportType::FiveRecords);
        assert!(req.selected.is_none());

        assert_eq!(
            params(None, Some("all"), None).into_request(),
            Err(Error::missing("documentType"))
        );
        assert_eq!(
            params(Some("Health Care"), None, None).into_request(),
            Err(Error::missing("exportType"))
        );
        assert!(matches!(
            params(Some("Health Care"), Some("csv"), None).into_request(),
            Err(Error::InvalidExportType { .. })
        ));
        assert!(matches!(
            params(Some("Health Care"), Some("filtered"), Some(" , ")).into_request(),
            Err(Error::SelectionRequired { .. })
        ));
    }
}
