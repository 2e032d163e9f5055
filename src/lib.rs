//! Weighted random assignment of cases to courts (sorteo de juzgados).
//!
//! Courts are drawn with probability inversely proportional to their
//! current active case load, so lightly loaded courts receive new cases
//! more often. Three stages run in sequence:
//!
//! 1. [`aggregate`] filters raw cases to the active-status subset and
//!    counts them per court,
//! 2. [`build_distribution`] turns the counts into a normalized
//!    probability distribution smoothed by `alfa`,
//! 3. [`sample`] draws one court by inverting the cumulative distribution.
//!
//! Randomness is always injected, so seeded runs are reproducible.

pub mod aggregate;
pub mod config;
pub mod distribution;
pub mod error;
pub mod load;
pub mod sample;
pub mod table;

pub use aggregate::aggregate;
pub use config::SorteoConfig;
pub use distribution::build_distribution;
pub use error::{Error, Result};
pub use sample::{invert, sample};
pub use table::{CaseRecord, CountRow, CountTable, DistributionRow, DistributionTable};

use rand::Rng;

/// Run the full pipeline over raw records and return the selected court.
pub fn draw(records: &[CaseRecord], config: &SorteoConfig, rng: &mut impl Rng) -> Result<String> {
    config.validate()?;
    let counts = aggregate(records, &config.active_statuses, rng)?;
    let distribution = build_distribution(&counts, config.alfa)?;
    let selected = sample(&distribution, config.clamp, rng)?;
    Ok(selected.to_string())
}
