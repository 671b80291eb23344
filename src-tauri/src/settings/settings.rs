// Settings management and persistence
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::connection::{ConnectionParams, DEFAULT_DATABASE_NAME};

/// Where the student store lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub database_name: String,
    pub data_dir: Option<PathBuf>, // Defaults to the app data directory
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            data_dir: None,
        }
    }
}

impl StoreSettings {
    pub fn connection_params(&self, app_dir: &Path) -> ConnectionParams {
        let data_dir = self.data_dir.clone().unwrap_or_else(|| app_dir.to_path_buf());
        ConnectionParams::new(data_dir, self.database_name.clone())
    }
}

/// Main application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub version: i32, // Settings schema version
    pub store: StoreSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: 1,
            store: StoreSettings::default(),
        }
    }
}

impl AppSettings {
    /// Get the settings file path
    pub fn get_settings_path(app_dir: &Path) -> PathBuf {
        app_dir.join("settings.json")
    }

    /// Load settings from file, or return defaults if file doesn't exist
    pub fn load(app_dir: &Path) -> Result<Self> {
        let path = Self::get_settings_path(app_dir);

        if !path.exists() {
            tracing::info!("no settings file found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;

        let settings: AppSettings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings {}", path.display()))?;

        tracing::info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to file
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        fs::create_dir_all(app_dir).context("Failed to create settings directory")?;

        let path = Self::get_settings_path(app_dir);
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write settings file {}", path.display()))?;

        tracing::info!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Load, writing the defaults out on first run
    pub fn load_or_init(app_dir: &Path) -> Result<Self> {
        let existed = Self::get_settings_path(app_dir).exists();
        let settings = Self::load(app_dir)?;
        if !existed {
            settings.save(app_dir)?;
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = AppSettings::load(dir.path()).unwrap();

        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.store.database_name, "school");
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let dir = TempDir::new().unwrap();

        AppSettings::load_or_init(dir.path()).unwrap();

        assert!(AppSettings::get_settings_path(dir.path()).exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut settings = AppSettings::default();
        settings.store.database_name = "academy".to_string();
        settings.store.data_dir = Some(PathBuf::from("/srv/records"));

        settings.save(dir.path()).unwrap();

        assert_eq!(AppSettings::load(dir.path()).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            AppSettings::get_settings_path(dir.path()),
            r#"{"store":{"data_dir":"/tmp/x"}}"#,
        )
        .unwrap();

        let settings = AppSettings::load(dir.path()).unwrap();

        assert_eq!(settings.version, 1);
        assert_eq!(settings.store.database_name, "school");
        assert_eq!(
            settings.store.connection_params(dir.path()).database_path(),
            PathBuf::from("/tmp/x/school.db")
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(AppSettings::get_settings_path(dir.path()), "{ not json").unwrap();

        assert!(AppSettings::load(dir.path()).is_err());
    }

    #[test]
    fn test_data_dir_defaults_to_app_dir() {
        let app_dir = Path::new("/home/op/.local/share/app");
        let params = StoreSettings::default().connection_params(app_dir);
        assert_eq!(params.database_path(), app_dir.join("school.db"));
    }
}
