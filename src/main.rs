//! Airbnb NYC 2019 ETL
//!
//! Downloads the raw listings CSV (once), drops irrelevant columns, fills
//! missing `reviews_per_month`, and writes a seeded 80/20 train/test split to
//! `data/processed`.

mod config;
mod data;
mod download;
mod error;
mod paths;
mod pipeline;

use anyhow::{Context, Result};
use config::PipelineConfig;
use download::HttpFetcher;
use paths::ProjectPaths;
use pipeline::Pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("airbnb_etl=info")),
        )
        .init();

    let paths = ProjectPaths::from_current_dir().context("Failed to prepare data directories")?;
    let config = PipelineConfig::load(&paths.root).context("Failed to load configuration")?;

    let report = Pipeline::new(config, paths, HttpFetcher::new())
        .run()
        .context("Pipeline run failed")?;

    tracing::info!(
        "Done: {} raw rows, {} columns kept -> {} train / {} test",
        report.raw_shape.0,
        report.clean_shape.1,
        report.train_rows,
        report.test_rows
    );
    Ok(())
}
