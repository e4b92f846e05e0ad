use super::{AttemptRecord, HistoryStore};
use crate::error::HistoryError;

/// In-process history. Used when persistence is disabled and in tests.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    records: Vec<AttemptRecord>,
    unavailable: Option<String>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with `HistoryError::Unavailable`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            unavailable: Some(reason.into()),
        }
    }

    /// Toggle failure mode.
    pub fn set_unavailable(&mut self, reason: Option<String>) {
        self.unavailable = reason;
    }

    fn check(&self) -> Result<(), HistoryError> {
        match &self.unavailable {
            Some(reason) => Err(HistoryError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&mut self, record: &AttemptRecord) -> Result<(), HistoryError> {
        self.check()?;
        self.records.push(record.clone());
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<AttemptRecord>, HistoryError> {
        self.check()?;
        Ok(self.records.clone())
    }

    fn clear_all(&mut self) -> Result<(), HistoryError> {
        self.check()?;
        self.records.clear();
        Ok(())
    }
}
