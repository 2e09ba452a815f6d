//! Train/Test Splitter Module
//! Seeded shuffle of row indices followed by a tail cut.
//!
//! The permutation is a Fisher-Yates shuffle (`SliceRandom::shuffle`) driven
//! by `StdRng::seed_from_u64(seed)`, so a given seed and row count always
//! yield the same partition within a build.

use crate::error::{PipelineError, Result};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Seeded permutation of `0..n`.
pub fn shuffled_indices(n: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    indices
}

/// Number of test rows: `floor(n * test_fraction)`.
pub fn test_size(n: usize, test_fraction: f64) -> Result<usize> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(PipelineError::InvalidArgument(format!(
            "test_fraction must be in (0, 1), got {}",
            test_fraction
        )));
    }
    Ok(((n as f64) * test_fraction).floor() as usize)
}

/// Shuffle the rows of `df` with `seed` and split them into (train, test).
///
/// The test set is the last `floor(n * test_fraction)` shuffled rows, the
/// train set is everything before it. Both keep the shuffled order. A
/// fraction too small to select any row yields an empty test set.
pub fn train_test_split(
    df: &DataFrame,
    test_fraction: f64,
    seed: u64,
) -> Result<(DataFrame, DataFrame)> {
    let n = df.height();
    if n == 0 {
        return Err(PipelineError::InvalidArgument(
            "cannot split an empty dataset".to_string(),
        ));
    }
    let test_n = test_size(n, test_fraction)?;
    let train_n = n - test_n;

    let order: Vec<IdxSize> = shuffled_indices(n, seed)
        .into_iter()
        .map(|i| i as IdxSize)
        .collect();
    let shuffled = df.take(&IdxCa::from_vec("idx".into(), order))?;

    let train = shuffled.slice(0, train_n);
    let test = shuffled.slice(train_n as i64, test_n);

    tracing::debug!(
        "Dataset split: {} train, {} test (seed {})",
        train.height(),
        test.height(),
        seed
    );

    Ok((train, test))
}
