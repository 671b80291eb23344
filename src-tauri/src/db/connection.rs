// Database connection management
use rusqlite::{Connection, OpenFlags};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::StoreError;

pub const DEFAULT_DATABASE_NAME: &str = "school";

/// Where the student store lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParams {
    pub data_dir: PathBuf,
    pub database_name: String,
}

impl ConnectionParams {
    pub fn new(data_dir: impl Into<PathBuf>, database_name: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            database_name: database_name.into(),
        }
    }

    /// Default `school` database inside the given directory
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(data_dir, DEFAULT_DATABASE_NAME)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.db", self.database_name))
    }
}

/// Opens a fresh connection per operation. Nothing is pooled or retried.
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    params: ConnectionParams,
}

impl DatabaseConnection {
    pub fn new(params: ConnectionParams) -> Self {
        Self { params }
    }

    pub fn path(&self) -> PathBuf {
        self.params.database_path()
    }

    /// Open the existing store read-write. A missing database is a connection failure.
    pub fn connect(&self) -> Result<Connection, StoreError> {
        let path = self.path();
        open_existing(&path).map_err(|source| StoreError::Connection { path, source })
    }
}

fn open_existing(path: &Path) -> rusqlite::Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Connection::open_with_flags(path, flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::provision;
    use tempfile::TempDir;

    #[test]
    fn test_database_path_uses_name() {
        let params = ConnectionParams::new("/var/lib/app", "school");
        assert_eq!(params.database_path(), PathBuf::from("/var/lib/app/school.db"));
    }

    #[test]
    fn test_connect_to_missing_store_fails() {
        let dir = TempDir::new().unwrap();
        let db = DatabaseConnection::new(ConnectionParams::in_dir(dir.path()));

        let err = db.connect().unwrap_err();
        match err {
            StoreError::Connection { path, .. } => assert_eq!(path, dir.path().join("school.db")),
            other => panic!("expected connection error, got {other:?}"),
        }
        assert!(!dir.path().join("school.db").exists());
    }

    #[test]
    fn test_connect_after_provision() {
        let dir = TempDir::new().unwrap();
        let params = ConnectionParams::in_dir(dir.path());
        provision(&params).unwrap();

        let conn = DatabaseConnection::new(params).connect().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
