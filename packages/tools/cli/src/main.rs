//! Edulab CLI (`edl`)
//!
//! HTTP API를 통해 문서 타입, 필드, 데이터 내보내기를 다루는 운영 도구입니다.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod context;

use commands::OutputFormat;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "edl")]
#[command(author, version, about = "Edulab CLI - manage document types, fields and exports", long_about = None)]
struct Cli {
    /// API server URL (overrides context)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage repo context
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },

    /// Manage document types
    DocType {
        #[command(subcommand)]
        action: DocTypeAction,
    },

    /// Manage document fields
    Fields {
        #[command(subcommand)]
        action: FieldsAction,
    },

    /// Export document data
    Export {
        /// Document type display name
        #[arg(long)]
        doc_type: String,

        /// Export type: all, filtered, 5records, template
        #[arg(long, default_value = "all")]
        kind: String,

        /// Comma-separated field names
        #[arg(long)]
        fields: Option<String>,

        /// Write records to a JSON file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Subcommand enums
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum ContextAction {
    /// Set context
    Set {
        #[arg(long)]
        server: Option<String>,
        /// Save to ~/.edulab/config.json instead of the repo context
        #[arg(long)]
        global: bool,
    },
    /// Show current context
    Show,
    /// Clear repo context
    Clear,
}

#[derive(Subcommand)]
enum DocTypeAction {
    /// List document types
    List,
    /// Register a document type
    Add {
        #[arg(long)]
        name: String,
        #[arg(long = "type")]
        doc_type: String,
    },
}

#[derive(Subcommand)]
enum FieldsAction {
    /// List fields of a document type
    List {
        #[arg(long)]
        doc_type: String,
    },
    /// Add a field (column) to a document type
    Add {
        #[arg(long)]
        doc_type: String,
        #[arg(long)]
        name: String,
        /// SQL column type, e.g. TEXT, INTEGER, VARCHAR(255)
        #[arg(long = "type")]
        field_type: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 설정 로드
    let config = CliConfig::load()?;

    // 컨텍스트 결정 (CLI 옵션 > repo context > 설정)
    let ctx = context::resolve_context(cli.server.as_deref(), &config)?;
    let format = cli.format;

    // 명령 실행
    match cli.command {
        Commands::Context { action } => match action {
            ContextAction::Set { server, global } => commands::context::set(server, global),
            ContextAction::Show => commands::context::show(),
            ContextAction::Clear => commands::context::clear(),
        },

        Commands::DocType { action } => match action {
            DocTypeAction::List => commands::doc_type::list(&ctx, format).await,
            DocTypeAction::Add { name, doc_type } => {
                commands::doc_type::add(&ctx, &name, &doc_type, format).await
            }
        },

        Commands::Fields { action } => match action {
            FieldsAction::List { doc_type } => {
                commands::fields::list(&ctx, &doc_type, format).await
            }
            FieldsAction::Add {
                doc_type,
                name,
                field_type,
            } => commands::fields::add(&ctx, &doc_type, &name, &field_type, format).await,
        },

        Commands::Export {
            doc_type,
            kind,
            fields,
            out,
        } => {
            commands::export::run(
                &ctx,
                &doc_type,
                &kind,
                fields.as_deref(),
                out.as_deref(),
                format,
            )
            .await
        }
    }
}
