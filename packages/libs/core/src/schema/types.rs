//! 컬럼 선언 타입
//!
//! `ALTER TABLE ... ADD COLUMN`에 그대로 들어가는 타입 문자열은 바인딩할 수
//! 없으므로, 허용된 문법만 통과시킵니다.
//!
//! 문법: `NAME[ NAME[ NAME]][(n[, m])]`, NAME = `[A-Za-z][A-Za-z0-9_]*`
//!
//! 예: `TEXT`, `INTEGER`, `VARCHAR(255)`, `DECIMAL(10, 2)`, `DOUBLE PRECISION`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MAX_TYPE_WORDS: usize = 3;
const MAX_TYPE_WORD_LEN: usize = 32;
const MAX_TYPE_ARGS: usize = 2;

/// 컬럼 제약 절을 여는 키워드. 타입 이름의 어느 자리에도 올 수 없습니다.
const CONSTRAINT_KEYWORDS: &[&str] = &[
    "NOT",
    "NULL",
    "PRIMARY",
    "KEY",
    "UNIQUE",
    "DEFAULT",
    "CHECK",
    "REFERENCES",
    "COLLATE",
    "GENERATED",
    "AS",
    "CONSTRAINT",
    "AUTOINCREMENT",
];

/// 검증 및 정규화된 컬럼 타입 (대문자)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldType(String);

impl FieldType {
    /// 타입 문자열 파싱
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || Error::InvalidFieldType {
            type_name: raw.to_string(),
        };

        let trimmed = raw.trim();
        let (head, args) = match trimmed.find('(') {
            Some(idx) => {
                let inner = trimmed[idx + 1..].strip_suffix(')').ok_or_else(invalid)?;
                (&trimmed[..idx], Some(inner))
            }
            None => (trimmed, None),
        };

        let words: Vec<&str> = head.split_whitespace().collect();
        if words.is_empty() || words.len() > MAX_TYPE_WORDS || !words.iter().all(|w| is_type_word(w))
        {
            return Err(invalid());
        }

        let mut normalized = words
            .iter()
            .map(|w| w.to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(" ");

        if let Some(args) = args {
            let nums: Vec<&str> = args.split(',').map(str::trim).collect();
            let all_numeric = nums
                .iter()
                .all(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()));
            if nums.len() > MAX_TYPE_ARGS || !all_numeric {
                return Err(invalid());
            }
            normalized.push('(');
            normalized.push_str(&nums.join(", "));
            normalized.push(')');
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_type_word(word: &str) -> bool {
    if CONSTRAINT_KEYWORDS
        .iter()
        .any(|kw| word.eq_ignore_ascii_case(kw))
    {
        return false;
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            word.len() <= MAX_TYPE_WORD_LEN && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
