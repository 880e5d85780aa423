//! CLI 명령어 구현

pub mod context;
pub mod doc_type;
pub mod export;
pub mod fields;
pub mod http;

/// 출력 형식
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// JSON 출력 (pretty)
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
