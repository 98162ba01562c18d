//! Catalog Seeder
//!
//! Seeds a remote catalog service (artists, genres, albums, records) from a
//! tabular CSV dataset. Entities already present on the server are skipped;
//! newly created ones feed their server-assigned ids into dependent rows.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog_seeder::config::{CliConfig, SeederConfig};
use catalog_seeder::{load_dataset, HttpCatalogClient, Seeder};

#[derive(Parser, Debug)]
#[command(name = "catalog-seeder")]
#[command(about = "Seed a catalog service from a CSV dataset")]
struct Args {
    /// Path to the dataset CSV file.
    #[arg(value_name = "DATASET_CSV")]
    dataset: PathBuf,

    /// Delay in milliseconds after each record creation.
    #[arg(long, default_value_t = 1000)]
    throttle_ms: u64,

    /// Timeout in seconds for each request to the catalog service.
    #[arg(long, default_value_t = 30)]
    timeout_sec: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = SeederConfig::resolve(&CliConfig {
        dataset_path: args.dataset,
        throttle_ms: args.throttle_ms,
        timeout_sec: args.timeout_sec,
    })
    .context("configuration error")?;

    info!("Catalog Seeder");
    info!("Target: {}", config.base_url());
    info!("Dataset: {}", config.dataset_path.display());

    let rows = load_dataset(&config.dataset_path).context("failed to load dataset")?;
    info!("Loaded {} dataset rows", rows.len());

    let client = HttpCatalogClient::new(
        &config.base_url(),
        &config.admin_name,
        &config.admin_password,
        config.timeout_sec,
    )
    .context("failed to build catalog client")?;

    let mut seeder = Seeder::new(client, rows, Duration::from_millis(config.throttle_ms));
    let stats = seeder.run().await.context("seeding aborted")?;

    info!("");
    info!("Seeding Summary");
    info!("===============");
    info!("Artists created: {}", stats.artists_created);
    info!("Genres created: {}", stats.genres_created);
    info!("Albums created: {}", stats.albums_created);
    info!("Records created: {}", stats.records_created);
    info!("Rows skipped (already present): {}", stats.rows_skipped);

    Ok(())
}
