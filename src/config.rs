//! Pipeline configuration.
//! Defaults reproduce the stock Airbnb NYC 2019 run; `<root>/pipeline.json`
//! may override any subset of fields.

use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "pipeline.json";

pub const DEFAULT_DATASET_URL: &str =
    "https://breathecode.herokuapp.com/asset/internal-link?id=927&path=AB_NYC_2019.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub dataset_url: String,
    /// Stem of the cached raw file under `data/raw`.
    pub dataset_name: String,
    pub test_fraction: f64,
    pub seed: u64,
    pub drop_columns: Vec<String>,
    pub fill_column: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            dataset_name: "AB_NYC_2019".to_string(),
            test_fraction: 0.2,
            seed: 42,
            drop_columns: ["id", "name", "host_name", "last_review"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            fill_column: "reviews_per_month".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Load `<root>/pipeline.json` if present, otherwise the defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(PipelineError::filesystem(path, e)),
        };

        let config: Self = serde_json::from_str(&text)
            .map_err(|source| PipelineError::Config { path: path.clone(), source })?;
        println!("Using config overrides from {}", path.display());
        tracing::info!(?config, "Loaded config overrides");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(PipelineError::InvalidArgument(format!(
                "test_fraction must be in (0, 1), got {}",
                self.test_fraction
            )));
        }
        if self.dataset_name.is_empty() {
            return Err(PipelineError::InvalidArgument(
                "dataset_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// File name of the cached raw CSV.
    pub fn raw_file_name(&self) -> String {
        format!("{}.csv", self.dataset_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_stock_run() {
        let config = PipelineConfig::default();
        assert_eq!(config.test_fraction, 0.2);
        assert_eq!(config.seed, 42);
        assert_eq!(config.raw_file_name(), "AB_NYC_2019.csv");
        assert_eq!(config.fill_column, "reviews_per_month");
        assert_eq!(config.drop_columns.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = PipelineConfig::load(dir.path()).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"seed": 7}"#).unwrap();

        let config = PipelineConfig::load(dir.path()).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.test_fraction, 0.2);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();

        let err = PipelineConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, PipelineError::Config { .. }));
    }

    #[test]
    fn test_out_of_range_fraction_rejected() {
        for fraction in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let config = PipelineConfig {
                test_fraction: fraction,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(PipelineError::InvalidArgument(_))
            ));
        }
    }
}
