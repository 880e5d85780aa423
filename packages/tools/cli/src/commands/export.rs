//! 데이터 내보내기 명령어

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use edulab_core::export::ExportType;

use crate::commands::http;
use crate::commands::{print_json, OutputFormat};
use crate::context::EffectiveContext;

#[derive(Debug, Deserialize)]
struct ExportResponse {
    count: usize,
    #[serde(default)]
    message: Option<String>,
    data: Vec<Value>,
}

pub async fn run(
    ctx: &EffectiveContext,
    document_type: &str,
    kind: &str,
    fields: Option<&str>,
    out: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let export_type: ExportType = kind.parse()?;

    let mut query = vec![
        ("documentType", document_type.to_string()),
        ("exportType", export_type.to_string()),
    ];
    if let Some(fields) = fields {
        query.push(("selectedFields", fields.to_string()));
    }

    let resp: ExportResponse = http::send_json(
        http::client()
            .get(ctx.endpoint("export-data"))
            .query(&query),
    )
    .await?;

    if let Some(path) = out {
        std::fs::write(path, serde_json::to_string_pretty(&resp.data)?)?;
        println!("Wrote {} record(s) to {}", resp.count, path.display());
        return Ok(());
    }

    if format == OutputFormat::Json {
        return print_json(&resp.data);
    }

    if let Some(message) = &resp.message {
        println!("{}", message);
    }
    for row in &resp.data {
        println!("{}", row);
    }
    println!("({} {} record(s) of '{}')", resp.count, export_type, document_type);
    Ok(())
}
