//! Rebuilds the shop search index from the database.
//!
//! ```text
//! reindex
//! reindex --concurrency 16 --retry-attempts 5
//! reindex --index shops-v2
//! ```
//!
//! Exits with status 1 when at least one shop could not be indexed.

use clap::Parser;
use shopfront::configuration::get_configuration;
use shopfront::db::PgStore;
use shopfront::search::{reindex_all, HttpSearchIndex};
use shopfront::telemetry::{get_subscriber, init_subscriber};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "reindex", version, about = "Rewrite every shop document in the search index")]
struct Cli {
    /// Maximum number of concurrent document writes
    #[arg(long)]
    concurrency: Option<usize>,
    /// Attempts per document before giving up on it
    #[arg(long)]
    retry_attempts: Option<usize>,
    /// Target index name, overrides search.index_name
    #[arg(long)]
    index: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = get_subscriber("shopfront-reindex".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let mut settings = get_configuration()?;
    if let Some(concurrency) = cli.concurrency {
        settings.search.concurrency = concurrency;
    }
    if let Some(retry_attempts) = cli.retry_attempts {
        settings.search.retry_attempts = retry_attempts;
    }
    if let Some(index) = cli.index {
        settings.search.index_name = index;
    }

    let pg_pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&settings.database.connection_string())
        .await?;

    let store = PgStore::new(pg_pool);
    let index = HttpSearchIndex::new(&settings.search)?;

    let report = reindex_all(&store, &index, &settings.search).await?;
    for failed in &report.failed {
        eprintln!(
            "shop {}: {} (after {} attempts)",
            failed.shop_id, failed.error, failed.attempts
        );
    }
    println!(
        "indexed {}/{} shops into {}",
        report.indexed, report.total, settings.search.index_name
    );

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
