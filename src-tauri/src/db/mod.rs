// Database module
// This module handles the SQLite student store

pub mod connection;
pub mod models;
pub mod operations;
pub mod schema;

pub use connection::{ConnectionParams, DatabaseConnection};
pub use models::{Course, Student, StudentDraft};
pub use operations::DbOperations;
