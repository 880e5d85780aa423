//! SeaQuery 동적 식별자

use sea_query::Iden;

/// 동적 테이블/컬럼/타입 식별자
#[derive(Debug, Clone)]
pub(crate) struct DynIden(pub(crate) String);

impl DynIden {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Iden for DynIden {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        let _ = s.write_str(&self.0);
    }
}
