//! edulab-sql: 동적 SQL 생성 라이브러리
//!
//! 메타데이터로 확인된 문서 타입 테이블을 기반으로 런타임에 SQL을 생성합니다.
//! 식별자는 SeaQuery가 인용(quote)하며, 값은 항상 바인딩합니다.
//!
//! # 모듈 구조
//!
//! - `builder`: 내보내기 SELECT 빌더
//! - `ddl`: 필드 추가(ALTER TABLE) 생성기
//! - `params`: 내보내기 요청 파라미터 파싱/검증

pub mod builder;
pub mod ddl;
pub mod params;

mod iden;

pub use builder::SelectBuilder;
pub use ddl::AddColumnBuilder;
pub use params::{ExportParams, ExportRequest, SelectedFields};
