//! API 서버 설정

use std::env;
use std::path::PathBuf;

/// API 서버 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버 포트
    pub port: u16,

    /// SQLite 데이터베이스 파일 경로
    pub db_path: PathBuf,

    /// 커넥션 풀 크기
    pub db_max_connections: u32,

    /// 데이터베이스 파일이 없으면 생성
    pub create_db: bool,
}

impl Config {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("EDULAB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,

            db_path: env::var("EDULAB_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("edulab-backend.db")),

            db_max_connections: env::var("EDULAB_DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,

            create_db: env::var("EDULAB_CREATE_DB")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        })
    }
}
