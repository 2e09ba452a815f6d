//! Pipeline driver: download, load, clean, split, write.

use crate::config::PipelineConfig;
use crate::data::{load_csv, train_test_split, write_csv, Cleaner};
use crate::download::{download_raw, DownloadOutcome, Fetcher};
use crate::error::Result;
use crate::paths::ProjectPaths;
use std::path::PathBuf;

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub download: DownloadOutcome,
    pub raw_shape: (usize, usize),
    pub clean_shape: (usize, usize),
    pub train_rows: usize,
    pub test_rows: usize,
    pub train_path: PathBuf,
    pub test_path: PathBuf,
}

pub struct Pipeline<F: Fetcher> {
    config: PipelineConfig,
    paths: ProjectPaths,
    fetcher: F,
}

impl<F: Fetcher> Pipeline<F> {
    pub fn new(config: PipelineConfig, paths: ProjectPaths, fetcher: F) -> Self {
        Self {
            config,
            paths,
            fetcher,
        }
    }

    /// Run every step in order; the first failure aborts the run.
    pub fn run(&self) -> Result<PipelineReport> {
        self.config.validate()?;

        let raw_path = self.paths.raw_file(&self.config.raw_file_name());
        let download = download_raw(&self.fetcher, &self.config.dataset_url, &raw_path)?;

        let raw = load_csv(&raw_path)?;
        let cleaner = Cleaner::new(
            self.config.drop_columns.clone(),
            self.config.fill_column.as_str(),
        );
        let cleaned = cleaner.clean(&raw)?;
        tracing::info!(
            "Cleaned dataset: {} rows, {} columns",
            cleaned.height(),
            cleaned.width()
        );

        let (mut train, mut test) =
            train_test_split(&cleaned, self.config.test_fraction, self.config.seed)?;
        println!("Train: {} rows | Test: {} rows", train.height(), test.height());

        let train_path = self.paths.train_file();
        let test_path = self.paths.test_file();
        write_csv(&mut train, &train_path)?;
        write_csv(&mut test, &test_path)?;

        Ok(PipelineReport {
            download,
            raw_shape: raw.shape(),
            clean_shape: cleaned.shape(),
            train_rows: train.height(),
            test_rows: test.height(),
            train_path,
            test_path,
        })
    }
}
