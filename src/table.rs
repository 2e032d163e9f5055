//! Tables flowing through the pipeline.
//!
//! Data moves strictly forward: raw case records → count table →
//! distribution table → one selected court. Each stage builds a fresh
//! table from the previous one; nothing is mutated in place afterwards.

/// One raw case row: the status label and the court that owns the case.
///
/// In the source dataset these come from the `est_descr` and `org_cod_pri`
/// columns; the column names are configuration (see
/// [`crate::config::SorteoConfig`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    pub entity_id: String,
    pub status: String,
}

impl CaseRecord {
    pub fn new(entity_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            status: status.into(),
        }
    }
}

/// Active case count for one court.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRow {
    pub entity_id: String,
    pub count: u64,
}

/// Per-court active case counts, one row per distinct court.
///
/// Row order is randomized by the aggregator and becomes the position
/// index used by the distribution builder and the sampler. The order
/// carries no meaning, but once assigned it must not be re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountTable {
    pub rows: Vec<CountRow>,
}

impl CountTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Smallest count across all rows, or `None` for an empty table.
    pub fn min_count(&self) -> Option<u64> {
        self.rows.iter().map(|r| r.count).min()
    }
}

/// A count row extended with its normalized probability and the running
/// (inclusive) cumulative probability.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionRow {
    pub entity_id: String,
    pub count: u64,
    /// Non-negative; all rows sum to 1.0.
    pub probability: f64,
    /// Non-decreasing over row order; final row is 1.0 within tolerance.
    pub cumulative: f64,
}

/// The count table with probability and cumulative columns attached, in the
/// aggregator's row order.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionTable {
    pub rows: Vec<DistributionRow>,
}

impl DistributionTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
