//! CLI 설정

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// 서버 URL 기본값
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// CLI 설정 (`~/.edulab/config.json`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// 기본 API 서버 URL
    pub default_server: Option<String>,
}

impl CliConfig {
    /// 설정 파일 경로
    fn config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home.join(".edulab").join("config.json"))
    }

    /// 설정 로드
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: CliConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 설정 저장
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// 서버 URL 결정 (설정 파일 > EDULAB_SERVER_URL > 기본값)
    pub fn server_url(&self) -> String {
        self.default_server
            .clone()
            .or_else(|| std::env::var("EDULAB_SERVER_URL").ok())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }
}
