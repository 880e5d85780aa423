//! edulab-core: Edulab 공통 핵심 라이브러리
//!
//! API 서버와 CLI가 공유하는 도메인 타입과 검증 로직을 제공합니다.
//!
//! # 모듈 구조
//!
//! - `document`: 문서 타입(document type) 레코드
//! - `schema`: 테이블 이름 규칙, 필드 정의, 필드 타입 검증
//! - `export`: 데이터 내보내기 모드
//! - `error`: 공통 에러 타입

pub mod document;
pub mod error;
pub mod export;
pub mod schema;

pub use error::{Error, Result};
