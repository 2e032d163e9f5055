//! Distribution Builder: inverse-count probability weights.
//!
//! Courts with fewer active cases should receive new cases more often. The
//! unnormalized weight for a court with count `c` is `1 / (c - min + alfa)`
//! where `min` is the lowest count in the table, so the least-loaded court
//! has the largest weight, and `alfa > 0` both keeps the denominator away
//! from zero and tunes how strongly low load is favored (large alfa tends
//! toward uniform).

use ndarray::Array1;
use tracing::debug;

use crate::error::{Error, Result};
use crate::table::{CountTable, DistributionRow, DistributionTable};

/// Attach probability and cumulative columns to a count table.
///
/// Row order is preserved exactly as the aggregator left it; the cumulative
/// column is the inclusive running sum of probabilities in that order, so
/// its final element is 1.0 up to rounding.
///
/// Deterministic: identical inputs produce identical columns.
///
/// Errors with [`Error::EmptyInput`] on a zero-row table and
/// [`Error::NonPositiveAlfa`] when `alfa` is not a positive finite number.
/// With `alfa > 0` every denominator is at least `alfa`, so no further
/// per-row check is needed.
pub fn build_distribution(table: &CountTable, alfa: f64) -> Result<DistributionTable> {
    if table.is_empty() {
        return Err(Error::EmptyInput);
    }
    if !alfa.is_finite() || alfa <= 0.0 {
        return Err(Error::NonPositiveAlfa { alfa });
    }

    let counts = Array1::from_iter(table.rows.iter().map(|r| r.count as f64));
    let min_count = table.min_count().unwrap_or(0) as f64;

    let weights = counts.mapv(|c| 1.0 / (c - min_count + alfa));
    let total = weights.sum();
    let probabilities = weights / total;

    let mut cumulative = Array1::<f64>::zeros(probabilities.len());
    let mut running = 0.0;
    for (i, &p) in probabilities.iter().enumerate() {
        running += p;
        cumulative[i] = running;
    }
    debug!(
        rows = table.len(),
        alfa,
        min_count,
        total_cumulative = running,
        "built probability distribution"
    );

    let rows = table
        .rows
        .iter()
        .zip(probabilities.iter().zip(cumulative.iter()))
        .map(|(row, (&probability, &cumulative))| DistributionRow {
            entity_id: row.entity_id.clone(),
            count: row.count,
            probability,
            cumulative,
        })
        .collect();

    Ok(DistributionTable { rows })
}
