// Error types shared by the store, view and dialog layers
use std::path::PathBuf;

use thiserror::Error;

use crate::db::models::UnknownCourse;

/// Failures raised while talking to the SQLite store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot open store at {}: {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("statement failed: {0}")]
    Statement(#[from] rusqlite::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Course(#[from] UnknownCourse),

    #[error("no student row is selected")]
    NoSelection,

    #[error("cell ({row}, {column}) is outside the table ({rows} rows)")]
    RowOutOfRange { row: usize, column: usize, rows: usize },

    #[error("the {open} dialog is already open")]
    DialogBusy { open: &'static str },

    #[error("no {expected} dialog is open")]
    DialogNotOpen { expected: &'static str },
}

// Statement errors surface from rusqlite directly inside repository code
impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Store(StoreError::Statement(err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
