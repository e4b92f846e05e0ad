//! Raw score summaries over the attempt history.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::history::AttemptRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HistorySummary {
    pub attempts: usize,
    pub best: Option<AttemptRecord>,
    pub latest: Option<AttemptRecord>,
    pub last_completed_at: Option<DateTime<Utc>>,
}

impl HistorySummary {
    /// Order of `records` does not matter.
    pub fn from_records(records: &[AttemptRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        // Ties go to the earlier attempt.
        let best = records
            .iter()
            .min_by(|a, b| {
                compare_scores(b, a).then(a.completed_at.cmp(&b.completed_at))
            })
            .cloned();
        let latest = records.iter().max_by_key(|r| r.completed_at).cloned();

        Self {
            attempts: records.len(),
            last_completed_at: latest.as_ref().map(|r| r.completed_at),
            best,
            latest,
        }
    }
}

/// Compares `a.final_score / a.max_score` with `b`'s without dividing.
/// Banks of different sizes stay comparable; an empty bank ranks lowest.
fn compare_scores(a: &AttemptRecord, b: &AttemptRecord) -> Ordering {
    match (a.max_score, b.max_score) {
        (0, 0) => Ordering::Equal,
        (0, _) => Ordering::Less,
        (_, 0) => Ordering::Greater,
        (a_max, b_max) => (u64::from(a.final_score) * u64::from(b_max))
            .cmp(&(u64::from(b.final_score) * u64::from(a_max))),
    }
}

/// Attempts newest first, for listing.
pub fn newest_first(records: &[AttemptRecord]) -> Vec<AttemptRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    sorted
}
