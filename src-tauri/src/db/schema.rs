// Schema bootstrap for a fresh install
use anyhow::{Context, Result};
use rusqlite::Connection;

use super::connection::ConnectionParams;

/// Create the database file and `students` table when they are missing.
/// Existing tables and rows are left alone.
pub fn provision(params: &ConnectionParams) -> Result<()> {
    std::fs::create_dir_all(&params.data_dir)
        .with_context(|| format!("Failed to create data directory {}", params.data_dir.display()))?;

    let path = params.database_path();
    let conn = Connection::open(&path)
        .with_context(|| format!("Failed to open database {}", path.display()))?;

    create_tables(&conn)?;

    tracing::info!(path = %path.display(), "student store ready");
    Ok(())
}

pub fn create_tables(conn: &Connection) -> Result<()> {
    // AUTOINCREMENT keeps deleted ids from being handed out again
    conn.execute(
        "CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            course TEXT NOT NULL,
            mobile TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}
