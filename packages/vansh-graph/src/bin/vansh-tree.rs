//! Vansh Tree CLI
//!
//! Builds family trees and relationship lists from a document-store export.
//!
//! # Usage
//!
//! ```bash
//! # Tree with layout for vansh 12
//! cargo run --bin vansh-tree -- tree --input members.json --vansh 12 --layout --pretty
//!
//! # Everyone related to serial 42
//! cargo run --bin vansh-tree -- relations --input members.json --vansh 12 --ser-no 42
//!
//! # Canonical members, all vanshes
//! cargo run --bin vansh-tree -- dedup --input members.json
//! ```
//!
//! JSON goes to stdout, logs to stderr (`RUST_LOG`, default `info`).

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vansh_graph::config::FamilyTreeConfig;
use vansh_graph::features::normalization::deduplicate_raw_with_stats;
use vansh_graph::pipeline::FamilyPipeline;
use vansh_graph::shared::models::SerialKey;
use vansh_graph::usecases::FamilyViewService;
use vansh_graph::{Result, VanshError};
use vansh_storage::{JsonExportSource, MemberSource};

#[derive(Parser)]
#[command(name = "vansh-tree")]
#[command(about = "Vansh Tree - family trees and relationships from member exports", long_about = None)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the family tree of one vansh
    Tree {
        /// Export file (JSON array or JSON lines)
        #[arg(short, long)]
        input: PathBuf,

        /// Vansh code
        #[arg(short, long)]
        vansh: String,

        /// Include computed coordinates and connectors
        #[arg(long)]
        layout: bool,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List relationships of one member
    Relations {
        /// Export file (JSON array or JSON lines)
        #[arg(short, long)]
        input: PathBuf,

        /// Vansh code
        #[arg(short, long)]
        vansh: String,

        /// Serial number of the focal member
        #[arg(short, long)]
        ser_no: String,
    },

    /// Print canonical members after deduplication
    Dedup {
        /// Export file (JSON array or JSON lines)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// List distinct vansh codes
    Vanshes {
        /// Export file (JSON array or JSON lines)
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tree {
            input,
            vansh,
            layout,
            config,
        } => {
            let config = match config {
                Some(path) => FamilyTreeConfig::from_yaml(path)?,
                None => FamilyTreeConfig::default(),
            };
            let pipeline = FamilyPipeline::new(config).with_layout(layout);
            let service = FamilyViewService::with_pipeline(JsonExportSource::new(input), pipeline);
            let view = service.family_view(&vansh).await?;
            if view.is_empty() {
                info!("No family tree data available for vansh {}", vansh);
            }
            print_json(&view, cli.pretty)?;
        }
        Commands::Relations {
            input,
            vansh,
            ser_no,
        } => {
            let focal = SerialKey::parse_str(&ser_no)?;
            let service = FamilyViewService::new(JsonExportSource::new(input));
            match service.relationships(&vansh, &focal).await? {
                Some(related) => print_json(&related, cli.pretty)?,
                None => return Err(VanshError::MemberNotFound { ser_no: focal, vansh }),
            }
        }
        Commands::Dedup { input } => {
            let batch = JsonExportSource::new(input).fetch_all().await?;
            let (members, stats) = deduplicate_raw_with_stats(&batch.records);
            info!(
                "dedup: {} records, {} skipped, {} merged, {} members",
                stats.input, stats.skipped, stats.merged, stats.output
            );
            print_json(&members, cli.pretty)?;
        }
        Commands::Vanshes { input } => {
            let service = FamilyViewService::new(JsonExportSource::new(input));
            print_json(&service.list_vanshes().await?, cli.pretty)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
