//! 내보내기 SELECT 빌더
//!
//! 검증된 `DocumentTable`과 선택 컬럼을 받아 SQL을 생성합니다.

use sea_query::{Asterisk, Query, SqliteQueryBuilder};

use edulab_core::schema::DocumentTable;

use crate::iden::DynIden;
use crate::params::SelectedFields;

/// SELECT 쿼리 빌더
pub struct SelectBuilder<'a> {
    table: &'a DocumentTable,
}

impl<'a> SelectBuilder<'a> {
    /// 새 빌더 생성
    pub fn new(table: &'a DocumentTable) -> Self {
        Self { table }
    }

    /// SQL 생성
    ///
    /// # Arguments
    /// * `selected` - 선택 컬럼 (None = 모든 컬럼). 호출자가 이미 검증했음
    /// * `limit` - 최대 행 수
    pub fn build(&self, selected: Option<&SelectedFields>, limit: Option<u64>) -> String {
        let mut query = Query::select();
        query.from(DynIden::new(self.table.name.as_str()));

        match selected {
            Some(fields) => {
                for col in fields.iter() {
                    query.column(DynIden::new(col));
                }
            }
            None => {
                query.column(Asterisk);
            }
        }

        if let Some(limit) = limit {
            query.limit(limit);
        }

        query.to_string(SqliteQueryBuilder)
    }
}
