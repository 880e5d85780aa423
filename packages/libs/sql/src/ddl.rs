//! 필드 추가 DDL 생성기

use sea_query::{ColumnDef, SqliteQueryBuilder, Table};

use edulab_core::schema::{DocumentTable, FieldDefinition};

use crate::iden::DynIden;

/// `ALTER TABLE ... ADD COLUMN` 빌더
pub struct AddColumnBuilder<'a> {
    table: &'a DocumentTable,
}

impl<'a> AddColumnBuilder<'a> {
    pub fn new(table: &'a DocumentTable) -> Self {
        Self { table }
    }

    /// SQL 생성
    ///
    /// 타입 문자열은 `FieldType` 검증을 통과한 값만 받으므로 그대로 출력합니다.
    pub fn build(&self, field: &FieldDefinition) -> String {
        let mut column = ColumnDef::new(DynIden::new(field.name.as_str()));
        column.custom(DynIden::new(field.field_type.as_str()));

        Table::alter()
            .table(DynIden::new(self.table.name.as_str()))
            .add_column(&mut column)
            .to_string(SqliteQueryBuilder)
    }
}
