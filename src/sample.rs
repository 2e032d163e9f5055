//! Sampler: inverse-CDF draw over the distribution table.
//!
//! The cumulative column is inverted by fitting a piecewise-linear
//! function through the points `(cumulative_i, i)`, evaluating it at a
//! uniform draw, and truncating to an integer row index. A direct binary
//! search would disagree with this exactly at segment boundaries, so the
//! interpolation is kept as the defined behavior. Out-of-range draws
//! (below the first cumulative value) have no interpolant; by default
//! they are clamped into the table, with a hard failure available behind
//! `clamp = false`.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::table::DistributionTable;

/// Draw a uniform sample over `[0, 1)` and invert the cumulative
/// distribution to select one court, returning its entity id.
pub fn sample<'a>(
    table: &'a DistributionTable,
    clamp: bool,
    rng: &mut impl Rng,
) -> Result<&'a str> {
    let s = Uniform::new(0.0, 1.0).sample(rng);
    let index = invert(table, s, clamp)?;
    let row = &table.rows[index];
    debug!(
        s,
        index,
        entity_id = %row.entity_id,
        probability = row.probability,
        "drew court"
    );
    Ok(&row.entity_id)
}

/// Deterministic half of the sampler: map a cumulative-probability value
/// `s` to a row index by linear interpolation over `(cumulative_i, i)`,
/// truncating the fractional position toward zero.
///
/// A single-row table always yields row 0, whatever `s` is.
///
/// `s` outside the span of the cumulative column has no interpolant; with
/// `clamp` it snaps to the nearest end of the table, otherwise it is an
/// [`Error::IndexOutOfRange`].
pub fn invert(table: &DistributionTable, s: f64, clamp: bool) -> Result<usize> {
    let n = table.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    if n == 1 {
        return Ok(0);
    }

    let cumulative: Vec<f64> = table.rows.iter().map(|r| r.cumulative).collect();
    let last = cumulative[n - 1];

    if s < cumulative[0] {
        if clamp {
            return Ok(0);
        }
        return Err(Error::IndexOutOfRange { index: -1, rows: n });
    }
    if s > last {
        if clamp {
            return Ok(n - 1);
        }
        return Err(Error::IndexOutOfRange {
            index: n as i64,
            rows: n,
        });
    }

    // First row whose cumulative value reaches s; j == 0 only when
    // s == cumulative[0].
    let j = cumulative.partition_point(|&c| c < s);
    let fractional = if j == 0 {
        0.0
    } else {
        // cumulative[j-1] < s <= cumulative[j], so the segment has
        // positive width even across zero-probability rows
        (j - 1) as f64 + (s - cumulative[j - 1]) / (cumulative[j] - cumulative[j - 1])
    };

    let index = fractional.trunc() as usize;
    Ok(index.min(n - 1))
}
