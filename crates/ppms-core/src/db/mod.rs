//! Database layer for patient records.

mod patients;
mod schema;

pub use schema::*;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;
use thiserror::Error;

use crate::models::{Patient, PatientInput};

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Connection lock poisoned: {0}")]
    Lock(String),

    #[error("patient not found")]
    NotFound(i64),
}

pub type DbResult<T> = Result<T, DbError>;

impl<T> From<std::sync::PoisonError<T>> for DbError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        DbError::Lock(e.to_string())
    }
}

/// Persistence operations over the `patient` table.
///
/// Only active rows (null `deletedat`) are ever read, updated or deleted.
pub trait PatientStore: Send + Sync {
    /// Insert a new row and return it as stored, with its generated id.
    fn insert(&self, patient: &PatientInput) -> DbResult<Patient>;

    /// Fetch an active row; `DbError::NotFound` when absent or soft-deleted.
    fn get_by_id(&self, id: i64) -> DbResult<Patient>;

    /// Fetch every active row. Empty when there are none.
    fn get_all(&self) -> DbResult<Vec<Patient>>;

    /// Overwrite the mutable fields of an active row and return it re-read.
    ///
    /// Existence is not checked up front: a missing row makes the write a
    /// no-op and the re-read fails with `DbError::NotFound`.
    fn update(&self, patient: &PatientInput, id: i64) -> DbResult<Patient>;

    /// Soft-delete an active row. Deleting an absent or already-deleted
    /// row touches nothing and still succeeds.
    fn delete(&self, id: i64) -> DbResult<()>;
}

/// Database connection wrapper.
///
/// The connection is behind a mutex so one handle can be shared across
/// request tasks.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open database at path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.initialize()?;
        Ok(db)
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.initialize()?;
        Ok(db)
    }

    /// Initialize schema.
    fn initialize(&self) -> DbResult<()> {
        self.conn()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Lock and return the raw connection (for advanced queries).
    pub fn conn(&self) -> DbResult<MutexGuard<'_, Connection>> {
        Ok(self.conn.lock()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory();
        assert!(db.is_ok());
    }

    #[test]
    fn test_schema_initialized() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.conn().unwrap();

        let columns: Vec<String> = conn
            .prepare("SELECT name FROM pragma_table_info('patient') ORDER BY cid")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert_eq!(
            columns,
            vec![
                "id",
                "name",
                "phone",
                "discharge",
                "createdat",
                "udatedat",
                "bloodgroup",
                "description",
                "deletedat",
            ]
        );
    }

    #[test]
    fn test_reopen_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ppms.db");

        let id = {
            let db = Database::open(&path).unwrap();
            db.insert(&PatientInput::new("Zopsmart")).unwrap().id
        };

        // Schema creation is idempotent on an existing file
        let db = Database::open(&path).unwrap();
        let patient = db.get_by_id(id).unwrap();
        assert_eq!(patient.name, "Zopsmart");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(DbError::NotFound(7).to_string(), "patient not found");
    }
}
