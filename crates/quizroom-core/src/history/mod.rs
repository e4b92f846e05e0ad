//! Append-only log of finished quiz attempts.

mod memory;
mod migrations;
mod sqlite;

pub use memory::MemoryHistory;
pub use sqlite::SqliteHistory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::HistoryError;

/// Summary of one completed quiz run. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub id: Uuid,
    pub final_score: u32,
    pub max_score: u32,
    pub completed_at: DateTime<Utc>,
}

impl AttemptRecord {
    pub fn new(final_score: u32, max_score: u32, completed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            final_score,
            max_score,
            completed_at,
        }
    }
}

/// Storage for attempt records. Callers make no assumption about the
/// order `list_all` returns records in.
pub trait HistoryStore {
    fn append(&mut self, record: &AttemptRecord) -> Result<(), HistoryError>;
    fn list_all(&self) -> Result<Vec<AttemptRecord>, HistoryError>;
    fn clear_all(&mut self) -> Result<(), HistoryError>;
}

impl<H: HistoryStore + ?Sized> HistoryStore for Box<H> {
    fn append(&mut self, record: &AttemptRecord) -> Result<(), HistoryError> {
        (**self).append(record)
    }

    fn list_all(&self) -> Result<Vec<AttemptRecord>, HistoryError> {
        (**self).list_all()
    }

    fn clear_all(&mut self) -> Result<(), HistoryError> {
        (**self).clear_all()
    }
}
