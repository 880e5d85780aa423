//! 문서 필드 명령어

use serde::{Deserialize, Serialize};

use edulab_core::schema::{DocumentField, FieldDefinition};

use crate::commands::http::{self, Envelope};
use crate::commands::{print_json, OutputFormat};
use crate::context::EffectiveContext;

pub async fn list(
    ctx: &EffectiveContext,
    document_type: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct FieldList {
        table_name: String,
        data: Vec<DocumentField>,
    }

    let resp: FieldList = http::send_json(
        http::client()
            .get(ctx.endpoint("document-fields"))
            .query(&[("documentType", document_type)]),
    )
    .await?;

    if format == OutputFormat::Json {
        return print_json(&resp.data);
    }

    println!("Fields of '{}' (table: {})", document_type, resp.table_name);
    for field in resp.data {
        let field_type = if field.field_type.is_empty() {
            "-"
        } else {
            field.field_type.as_str()
        };
        println!("{:>4}  {:<32} {}", field.field_id, field.field_name, field_type);
    }
    Ok(())
}

pub async fn add(
    ctx: &EffectiveContext,
    document_type: &str,
    name: &str,
    field_type: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    // 서버와 같은 규칙으로 미리 검증
    let definition = FieldDefinition::new(Some(name), Some(field_type))?;

    #[derive(Serialize)]
    struct AddFieldRequest<'a> {
        #[serde(rename = "documentType")]
        document_type: &'a str,
        field_name: &'a str,
        field_type: &'a str,
    }

    let resp: Envelope<DocumentField> = http::send_json(
        http::client()
            .post(ctx.endpoint("document-fields"))
            .json(&AddFieldRequest {
                document_type,
                field_name: &definition.name,
                field_type: definition.field_type.as_str(),
            }),
    )
    .await?;

    if format == OutputFormat::Json {
        return print_json(&resp.data);
    }

    println!(
        "{} field #{}: {} {}",
        resp.message.as_deref().unwrap_or("Added"),
        resp.data.field_id,
        resp.data.field_name,
        resp.data.field_type
    );
    Ok(())
}
