//! CSV output.

use crate::error::{PipelineError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Write `df` as CSV with a header row and no index column.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|e| PipelineError::filesystem(path, e))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|e| PipelineError::filesystem(path, std::io::Error::other(e)))?;

    println!("Saved: {}", path.display());
    Ok(())
}
