// Settings module
// Persisted application settings

pub mod settings;

pub use settings::{AppSettings, StoreSettings};
