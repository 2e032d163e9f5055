//! Error types for the sorteo pipeline.
//!
//! Three kinds of pipeline failures exist, and all of them surface
//! immediately to the caller of the failing stage:
//! - empty input: a stage received (or produced for a stage that cannot
//!   accept it) a zero-row table — there is no valid "no selection" result,
//! - domain: a parameter violates a stage precondition (`alfa <= 0`,
//!   empty active-status set),
//! - index: the sampler's interpolated row index fell outside the table
//!   (only reachable when clamping is disabled).
//!
//! Loading and configuration errors from the collaborators (polars, I/O,
//! TOML) are wrapped rather than re-modeled.

use thiserror::Error;

/// Result type alias for sorteo operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// No rows left to work with. Raised by the distribution builder and
    /// the sampler; an empty filtered set is not a valid outcome.
    #[error("no active cases: the filtered table has zero rows")]
    EmptyInput,

    /// The smoothing parameter must be strictly positive and finite,
    /// otherwise the lowest-count row's weight denominator degenerates.
    #[error("alfa must be a strictly positive finite number, got {alfa}")]
    NonPositiveAlfa { alfa: f64 },

    /// The active-status filter would reject every record by construction.
    #[error("the active-status set is empty")]
    NoActiveStatuses,

    /// Inverse-CDF inversion landed outside the table; only reachable
    /// when clamping is turned off.
    #[error("interpolated row index {index} is outside 0..{rows}")]
    IndexOutOfRange { index: i64, rows: usize },

    /// A required column is missing or has the wrong dtype in the input
    /// dataset.
    #[error("column {name:?} unusable in input dataset: {source}")]
    Column {
        name: String,
        source: polars::error::PolarsError,
    },

    #[error(transparent)]
    Dataframe(#[from] polars::error::PolarsError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Config {
        path: String,
        source: toml::de::Error,
    },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}
