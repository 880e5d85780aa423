//! API 앱 상태

use crate::config::Config;
use crate::db::SchemaStore;

/// 앱 상태
///
/// 모든 핸들러에서 공유하는 상태입니다. 서버 시작 시 한 번 만들어지고,
/// 종료 시 `SchemaStore::close`로 커넥션을 정리합니다.
pub struct AppState {
    /// 설정
    pub config: Config,

    /// 스키마 저장소 (SQLite 커넥션 풀)
    pub store: SchemaStore,
}

impl AppState {
    /// 새 상태 생성
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let store = SchemaStore::connect(config).await?;
        Ok(Self {
            config: config.clone(),
            store,
        })
    }
}
