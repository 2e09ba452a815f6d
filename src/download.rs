//! Raw dataset download with an on-disk cache.

use crate::error::{PipelineError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Source of raw bytes for a URL.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP(S) fetcher.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let network = |e: reqwest::Error| PipelineError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(network)?
            .error_for_status()
            .map_err(network)?;
        let body = response.bytes().map_err(network)?;
        Ok(body.to_vec())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The target already existed; nothing was fetched.
    Cached,
    Downloaded { bytes: usize },
}

/// Fetch `url` into `target` unless `target` already exists.
pub fn download_raw<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    target: &Path,
) -> Result<DownloadOutcome> {
    if target.exists() {
        println!("File already exists at {}", target.display());
        tracing::debug!("Cache hit, skipping fetch of {}", url);
        return Ok(DownloadOutcome::Cached);
    }

    tracing::info!("Downloading {}", url);
    let body = fetcher.fetch(url)?;
    persist(target, &body)?;
    println!("Downloaded and saved to {}", target.display());

    Ok(DownloadOutcome::Downloaded { bytes: body.len() })
}

/// Write through a sibling temp file so an interrupted write never leaves a
/// partial file at `target`.
fn persist(target: &Path, body: &[u8]) -> Result<()> {
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| PipelineError::filesystem(dir, e))?;
    tmp.write_all(body)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| PipelineError::filesystem(tmp.path(), e))?;
    tmp.persist(target)
        .map_err(|e| PipelineError::filesystem(target, e.error))?;
    Ok(())
}
