//! 문서 타입 스키마
//!
//! # 개요
//!
//! 문서 타입마다 하나의 테이블이 미리 준비되어 있고, 테이블의 컬럼이 곧
//! 그 문서 타입의 필드입니다. 이 모듈은 표시 이름 → 테이블 이름 규칙과
//! 사용자 입력 식별자/타입 검증을 담당합니다.
//!
//! # 모듈 구조
//!
//! - `naming`: 테이블 이름 도출 및 식별자 검증
//! - `field`: 필드(컬럼) 정의
//! - `table`: 존재가 확인된 문서 타입 테이블
//! - `types`: 컬럼 선언 타입 검증

mod field;
mod naming;
mod table;
mod types;

pub use field::{DocumentField, FieldDefinition};
pub use naming::{is_reserved_table, is_valid_identifier, table_name_for, DOCUMENT_TYPE_TABLE};
pub use table::DocumentTable;
pub use types::FieldType;
