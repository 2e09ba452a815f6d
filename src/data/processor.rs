//! Data Processor Module
//! Drops irrelevant columns and fills missing values.

use crate::error::Result;
use polars::prelude::*;

/// Column clean-up applied before splitting.
#[derive(Debug, Clone)]
pub struct Cleaner {
    drop_columns: Vec<String>,
    fill_column: String,
}

impl Cleaner {
    pub fn new(drop_columns: Vec<String>, fill_column: impl Into<String>) -> Self {
        Self {
            drop_columns,
            fill_column: fill_column.into(),
        }
    }

    /// Drop the excluded columns that are present and fill nulls in the
    /// fill column with `0`. Row order and the order of kept columns are
    /// preserved; other columns keep their nulls.
    pub fn clean(&self, df: &DataFrame) -> Result<DataFrame> {
        let present: Vec<PlSmallStr> = df
            .get_column_names()
            .into_iter()
            .filter(|name| self.drop_columns.iter().any(|d| d.as_str() == name.as_str()))
            .cloned()
            .collect();

        let mut cleaned = df.clone();
        for name in &present {
            cleaned = cleaned.drop(name.as_str())?;
        }
        tracing::debug!("Dropped columns: {:?}", present);

        if cleaned.column(&self.fill_column).is_err() {
            return Ok(cleaned);
        }

        let filled = cleaned
            .lazy()
            .with_column(col(self.fill_column.as_str()).fill_null(lit(0)))
            .collect()?;

        Ok(filled)
    }
}
