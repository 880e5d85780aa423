//! 문서 타입 명령어

use serde::Serialize;

use edulab_core::document::{DocumentType, NewDocumentType};

use crate::commands::http::{self, Envelope};
use crate::commands::{print_json, OutputFormat};
use crate::context::EffectiveContext;

pub async fn list(ctx: &EffectiveContext, format: OutputFormat) -> anyhow::Result<()> {
    let resp: Envelope<Vec<DocumentType>> =
        http::send_json(http::client().get(ctx.endpoint("document-type"))).await?;

    if format == OutputFormat::Json {
        return print_json(&resp.data);
    }

    if resp.data.is_empty() {
        println!("No document types.");
        return Ok(());
    }

    for doc in resp.data {
        println!(
            "{:>4}  {} [{}]  table: {}",
            doc.id,
            doc.document_name,
            doc.doc_type,
            doc.table_name()
        );
    }
    Ok(())
}

pub async fn add(
    ctx: &EffectiveContext,
    name: &str,
    doc_type: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let new = NewDocumentType::new(Some(name), Some(doc_type))?;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct CreateDocumentTypeRequest<'a> {
        document_name: &'a str,
        #[serde(rename = "type")]
        doc_type: &'a str,
    }

    let resp: Envelope<DocumentType> = http::send_json(
        http::client()
            .post(ctx.endpoint("document-type"))
            .json(&CreateDocumentTypeRequest {
                document_name: &new.document_name,
                doc_type: &new.doc_type,
            }),
    )
    .await?;

    if format == OutputFormat::Json {
        return print_json(&resp.data);
    }

    println!(
        "Created document type #{}: {} (table: {})",
        resp.data.id,
        resp.data.document_name,
        resp.data.table_name()
    );
    Ok(())
}
