//! Repo Context 관리
//!
//! `.edulab/context.json` 파일을 통해 repo-local 컨텍스트를 관리합니다.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::CliConfig;

/// Repo Context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
}

/// Effective Context (최종 결정된 컨텍스트)
#[derive(Debug, Clone)]
pub struct EffectiveContext {
    pub server_url: String,
}

impl EffectiveContext {
    /// 엔드포인트 URL 생성
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.server_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

impl RepoContext {
    /// 컨텍스트 파일 경로
    fn context_path() -> PathBuf {
        PathBuf::from(".edulab/context.json")
    }

    /// 컨텍스트 로드
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::context_path())
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let ctx: RepoContext = serde_json::from_str(&content)?;
            Ok(ctx)
        } else {
            Ok(Self::default())
        }
    }

    /// 컨텍스트 저장
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::context_path())
    }

    fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 컨텍스트 삭제
    pub fn clear() -> anyhow::Result<()> {
        let path = Self::context_path();
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// 컨텍스트 결정 (CLI 옵션 > repo context > CLI 설정)
pub fn resolve_context(server: Option<&str>, config: &CliConfig) -> anyhow::Result<EffectiveContext> {
    let repo_ctx = RepoContext::load().unwrap_or_default();
    Ok(merge(server, repo_ctx, config))
}

fn merge(server: Option<&str>, repo_ctx: RepoContext, config: &CliConfig) -> EffectiveContext {
    EffectiveContext {
        server_url: server
            .map(|s| s.to_string())
            .or(repo_ctx.server_url)
            .unwrap_or_else(|| config.server_url()),
    }
}
