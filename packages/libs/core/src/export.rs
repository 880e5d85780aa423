//! 데이터 내보내기 모드

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// 내보내기 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportType {
    /// 모든 행 (선택 컬럼 또는 전체 컬럼)
    #[serde(rename = "all")]
    All,

    /// 선택 컬럼 필수, 그 외에는 `All`과 동일
    #[serde(rename = "filtered")]
    Filtered,

    /// `All`과 동일하되 최대 5행
    #[serde(rename = "5records")]
    FiveRecords,

    /// 행 데이터 없이 컬럼별 빈 값 스켈레톤
    #[serde(rename = "template")]
    Template,
}

impl ExportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportType::All => "all",
            ExportType::Filtered => "filtered",
            ExportType::FiveRecords => "5records",
            ExportType::Template => "template",
        }
    }

    /// 조회 행 수 제한
    pub fn row_limit(&self) -> Option<u64> {
        match self {
            ExportType::FiveRecords => Some(5),
            _ => None,
        }
    }

    /// `selectedFields`가 반드시 있어야 하는지
    pub fn requires_selection(&self) -> bool {
        matches!(self, ExportType::Filtered)
    }

    /// 실제 행을 읽는지 (template은 스키마만 사용)
    pub fn reads_rows(&self) -> bool {
        !matches!(self, ExportType::Template)
    }
}

/// 템플릿 내보내기 결과
///
/// 컬럼마다 `{ "<column>": "" }` 객체 하나씩을 만듭니다.
pub fn template_rows<'a>(columns: impl IntoIterator<Item = &'a str>) -> Vec<Value> {
    columns
        .into_iter()
        .map(|column| {
            let mut obj = serde_json::Map::new();
            obj.insert(column.to_string(), Value::String(String::new()));
            Value::Object(obj)
        })
        .collect()
}

impl FromStr for ExportType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ExportType::All),
            "filtered" => Ok(ExportType::Filtered),
            "5records" => Ok(ExportType::FiveRecords),
            "template" => Ok(ExportType::Template),
            other => Err(Error::InvalidExportType {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
