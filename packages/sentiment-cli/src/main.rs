//! Brand sentiment batch CLI
//!
//! Reads a table of entity names, scores social media sentiment for each one
//! and writes the input table back out with summary columns appended.

mod config;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use brand_sentiment::table::{write_json, DEFAULT_ENTITY_COLUMN};
use brand_sentiment::{ApifyFetcher, BatchRunner, EntityTable, LexiconScorer};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "brand-sentiment")]
#[command(about = "Score social media sentiment for a table of entities")]
struct Cli {
    /// CSV file with one entity per row
    #[arg(long, short)]
    input: PathBuf,

    /// Where to write results (stdout when omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Header of the column holding entity names
    #[arg(long, default_value = DEFAULT_ENTITY_COLUMN)]
    column: String,

    /// Posts requested per entity
    #[arg(long)]
    limit: Option<usize>,

    /// Entities processed at the same time
    #[arg(long)]
    concurrency: Option<usize>,

    /// Per-entity fetch timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,brand_sentiment=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true),
        )
        .init();

    let cli = Cli::parse();

    // Configuration problems abort before any entity is fetched
    let config = Config::from_env()?.with_overrides(cli.limit, cli.concurrency, cli.timeout_secs);
    let fetcher = ApifyFetcher::from_credentials(&config.credentials)
        .context("Invalid search credentials")?;
    let runner = BatchRunner::new(fetcher, LexiconScorer::new(), config.batch.clone())
        .context("Invalid batch configuration")?;

    let table = EntityTable::from_path(&cli.input, &cli.column)
        .with_context(|| format!("Failed to read entity table {}", cli.input.display()))?;
    tracing::info!(
        input = %cli.input.display(),
        entities = table.len(),
        "Loaded entity table"
    );

    let entities = table.entities();
    let result = runner.run(&entities[..]).await;

    match (&cli.output, cli.format) {
        (Some(path), OutputFormat::Csv) => table
            .write_csv_path(path, &result)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        (Some(path), OutputFormat::Json) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_json(file, &result)
                .with_context(|| format!("Failed to write {}", path.display()))?
        }
        (None, OutputFormat::Csv) => table
            .write_csv(io::stdout().lock(), &result)
            .context("Failed to write results")?,
        (None, OutputFormat::Json) => {
            write_json(io::stdout().lock(), &result).context("Failed to write results")?
        }
    }

    let totals = result.totals();
    tracing::info!(
        entities = totals.entities,
        silent_entities = totals.silent_entities,
        mentions = totals.mentions,
        "Done"
    );

    Ok(())
}
