//! 테이블 이름 규칙
//!
//! 문서 타입 표시 이름을 소문자로 바꾸고, 연속된 공백을 `_` 하나로 치환한
//! 결과가 테이블 이름입니다. (`"Health Care"` → `health_care`)

/// 문서 타입 레지스트리 테이블
pub const DOCUMENT_TYPE_TABLE: &str = "document_type";

/// 식별자 최대 길이
const MAX_IDENTIFIER_LEN: usize = 64;

/// 표시 이름에서 테이블 이름 도출
///
/// 앞뒤 공백도 잘라내지 않고 `_`로 치환합니다.
pub fn table_name_for(display_name: &str) -> String {
    let mut out = String::with_capacity(display_name.len());
    let mut in_whitespace = false;

    for ch in display_name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
            out.extend(ch.to_lowercase());
        }
    }

    out
}

/// 문서 타입 테이블로 취급하면 안 되는 테이블
///
/// 레지스트리 테이블과 SQLite 내부 테이블이 해당됩니다.
pub fn is_reserved_table(name: &str) -> bool {
    name.eq_ignore_ascii_case(DOCUMENT_TYPE_TABLE)
        || name.to_ascii_lowercase().starts_with("sqlite_")
}

/// 새 컬럼 이름으로 사용할 수 있는 식별자인지
///
/// `[A-Za-z_][A-Za-z0-9_]*`, 최대 64자.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    name.len() <= MAX_IDENTIFIER_LEN
        && (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
