//! Load Aggregator: active-case counts per court.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::table::{CaseRecord, CountRow, CountTable};

/// Filter records to the active-status subset and count cases per court.
///
/// One output row per distinct court seen among active records. Row order
/// is shuffled with `rng`; it becomes the position index the rest of the
/// pipeline uses, and carries no semantic meaning.
///
/// A filtered set with no records yields an empty table — the distribution
/// builder is the stage that turns that into an error.
pub fn aggregate(
    records: &[CaseRecord],
    active_statuses: &BTreeSet<String>,
    rng: &mut impl Rng,
) -> Result<CountTable> {
    if active_statuses.is_empty() {
        return Err(Error::NoActiveStatuses);
    }

    // Counts keyed by court, in a deterministic order before the shuffle
    // so a seeded rng reproduces the same table.
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    let mut active = 0usize;
    for record in records {
        if active_statuses.contains(&record.status) {
            *counts.entry(record.entity_id.as_str()).or_insert(0) += 1;
            active += 1;
        }
    }
    debug!(
        total = records.len(),
        active,
        courts = counts.len(),
        "aggregated active case counts"
    );

    let mut rows: Vec<CountRow> = counts
        .into_iter()
        .map(|(entity_id, count)| CountRow {
            entity_id: entity_id.to_string(),
            count,
        })
        .collect();
    rows.shuffle(rng);

    Ok(CountTable { rows })
}
