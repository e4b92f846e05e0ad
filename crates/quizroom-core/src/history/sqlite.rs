//! SQLite-backed attempt history.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{migrations, AttemptRecord, HistoryStore};
use crate::error::{CoreError, HistoryError};
use crate::storage::data_dir;

/// Attempt history stored in `<data_dir>/history.db`.
pub struct SqliteHistory {
    conn: Connection,
}

impl SqliteHistory {
    /// Open the default database under the data directory.
    ///
    /// Creates the database file and schema if they don't exist.
    pub fn open_default() -> Result<Self, CoreError> {
        let path = data_dir()?.join("history.db");
        Ok(Self::open(&path)?)
    }

    pub fn open(path: &Path) -> Result<Self, HistoryError> {
        let conn = Connection::open(path).map_err(|source| HistoryError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::with_connection(conn)
    }

    pub fn open_memory() -> Result<Self, HistoryError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, HistoryError> {
        migrations::migrate(&conn).map_err(|e| HistoryError::MigrationFailed(e.to_string()))?;
        Ok(Self { conn })
    }
}

impl HistoryStore for SqliteHistory {
    fn append(&mut self, record: &AttemptRecord) -> Result<(), HistoryError> {
        self.conn.execute(
            "INSERT INTO attempts (id, final_score, max_score, completed_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                record.id.to_string(),
                record.final_score,
                record.max_score,
                record
                    .completed_at
                    .to_rfc3339_opts(SecondsFormat::Nanos, true),
            ],
        )?;
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<AttemptRecord>, HistoryError> {
        let mut stmt = self.conn.prepare(
            "SELECT seq, id, final_score, max_score, completed_at
             FROM attempts
             ORDER BY seq",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, u32>(2)?,
                row.get::<_, u32>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (seq, id, final_score, max_score, completed_at) = row?;
            let id = Uuid::parse_str(&id).map_err(|e| HistoryError::Corrupt {
                row: seq,
                message: e.to_string(),
            })?;
            let completed_at = DateTime::parse_from_rfc3339(&completed_at)
                .map_err(|e| HistoryError::Corrupt {
                    row: seq,
                    message: e.to_string(),
                })?
                .with_timezone(&Utc);
            records.push(AttemptRecord {
                id,
                final_score,
                max_score,
                completed_at,
            });
        }
        Ok(records)
    }

    fn clear_all(&mut self) -> Result<(), HistoryError> {
        self.conn.execute("DELETE FROM attempts", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_then_list_returns_exact_record() {
        let mut store = SqliteHistory::open_memory().unwrap();
        let record = AttemptRecord::new(2, 3, Utc::now());
        store.append(&record).unwrap();
        assert_eq!(store.list_all().unwrap(), vec![record]);
    }

    #[test]
    fn clear_empties_store() {
        let mut store = SqliteHistory::open_memory().unwrap();
        for score in 0..3 {
            store
                .append(&AttemptRecord::new(score, 3, Utc::now()))
                .unwrap();
        }
        store.clear_all().unwrap();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut store = SqliteHistory::open_memory().unwrap();
        let record = AttemptRecord::new(1, 1, Utc::now());
        store.append(&record).unwrap();
        assert!(matches!(
            store.append(&record),
            Err(HistoryError::QueryFailed(_))
        ));
    }

    #[test]
    fn corrupt_row_reported() {
        let store = SqliteHistory::open_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO attempts (id, final_score, max_score, completed_at)
                 VALUES ('not-a-uuid', 1, 1, '2024-01-01T00:00:00Z')",
                [],
            )
            .unwrap();
        assert!(matches!(
            store.list_all(),
            Err(HistoryError::Corrupt { row: 1, .. })
        ));
    }
}
