//! CSV Loader Module
//! Reads the raw CSV into a Polars DataFrame.

use crate::error::{PipelineError, Result};
use polars::prelude::*;
use std::path::Path;

/// Rows scanned for schema inference.
const INFER_SCHEMA_ROWS: usize = 10_000;

/// Load a CSV file with a header row.
///
/// Malformed input is reported, never skipped.
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    let parse = |source: PolarsError| PipelineError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .finish()
        .map_err(parse)?
        .collect()
        .map_err(parse)?;

    let (rows, cols) = df.shape();
    println!("Dimensions: {} rows, {} columns", rows, cols);
    tracing::debug!("Columns: {:?}", column_names(&df));

    Ok(df)
}

/// Column names in source order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}
