//! CLI entry point for odata-snippets

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use odata_snippets::config::SnippetConfig;
use odata_snippets::expressions::Language;
use odata_snippets::model::{PathSegment, RequestModel};

#[derive(Parser)]
#[command(name = "odata-snippets")]
#[command(about = "Render the query section of OData code snippets")]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in language preset (overrides config)
    #[arg(short, long)]
    language: Option<String>,

    /// Custom expressions table in TOML (overrides config and language)
    #[arg(short, long)]
    expressions: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the query section for a request model (JSON)
    Query {
        /// Path to the request model
        request: PathBuf,
    },
    /// Resolve the type name behind a path segment (JSON)
    Resolve {
        /// Path to the path segment
        segment: PathBuf,
        /// Property or parameter name to look for
        identifier: String,
        /// Print the class name instead of the qualified type name
        #[arg(long)]
        class_name: bool,
    },
    /// List built-in language presets
    Languages,
    /// Inspect a request model (show parsed options for debugging)
    Inspect {
        /// Path to the request model
        request: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    // File first, then ODATA_SNIPPETS_* environment variables on top
    let mut config = SnippetConfig::load(cli.config.as_deref())?;

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    // Apply CLI overrides
    if let Some(language) = cli.language {
        config.language = language;
        config.expressions_file = None;
    }
    if let Some(expressions) = cli.expressions {
        config.expressions_file = Some(expressions);
    }

    match cli.command {
        Commands::Languages => {
            for language in Language::ALL {
                println!("{}", language);
            }
            Ok(())
        }
        Commands::Inspect { request } => inspect_request(&read_request(&request)?),
        Commands::Query { request } => {
            config.validate()?;
            let model = read_request(&request)?;
            let section = odata_snippets::render_query_section(&config, &model)?;
            println!("{}", section);
            Ok(())
        }
        Commands::Resolve {
            segment,
            identifier,
            class_name,
        } => {
            if class_name {
                config.class_names = true;
            }
            let segment: PathSegment = serde_json::from_str(&std::fs::read_to_string(&segment)?)?;
            info!("Resolving {} on segment {}", identifier, segment.identifier());
            match odata_snippets::render_type_name(&config, &segment, &identifier) {
                Some(type_name) => {
                    println!("{}", type_name);
                    Ok(())
                }
                None => bail!(
                    "No type found for {} on segment {}",
                    identifier,
                    segment.identifier()
                ),
            }
        }
    }
}

fn read_request(path: &Path) -> Result<RequestModel> {
    info!("Reading request model: {:?}", path);
    let json = std::fs::read_to_string(path)?;
    Ok(RequestModel::from_json(&json)?)
}

fn inspect_request(model: &RequestModel) -> Result<()> {
    println!("Headers:");
    for (name, values) in model.request_headers.iter() {
        println!("  - {}: {:?}", name, values);
    }
    let lists = [
        ("Filter", &model.filter_field_list),
        ("Expand", &model.expand_field_list),
        ("Select", &model.select_field_list),
        ("OrderBy", &model.order_by_field_list),
    ];
    for (label, fields) in lists {
        if !fields.is_empty() {
            println!("{}: {:?}", label, fields);
        }
    }
    if let Some(search) = model.search() {
        println!("Search: {}", search);
    }
    if let Some(skip) = model.odata_uri.skip {
        println!("Skip: {}", skip);
    }
    if let Some(skip_token) = model.skip_token() {
        println!("SkipToken: {}", skip_token);
    }
    if let Some(top) = model.odata_uri.top {
        println!("Top: {}", top);
    }
    Ok(())
}
