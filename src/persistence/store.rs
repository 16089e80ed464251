use crate::domain::AppData;
use crate::persistence::atomic_write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures at the storage boundary. Read covers both I/O and parse problems
/// since callers recover from either the same way, by substituting defaults.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read state from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to write state to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Owned handle to the state blob. Tests point it at a temp directory.
#[derive(Debug, Clone)]
pub struct Store {
    state_path: PathBuf,
}

impl Store {
    pub fn new<P: Into<PathBuf>>(state_path: P) -> Self {
        Self {
            state_path: state_path.into(),
        }
    }

    /// Store over the discovered data directory
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(crate::persistence::state_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.state_path
    }

    /// Load the state blob. A missing file is a normal first run and loads as
    /// the default state; an unreadable or unparseable file is a read error.
    pub fn load(&self) -> Result<AppData, StorageError> {
        if !self.state_path.exists() {
            return Ok(AppData::default());
        }

        let content =
            std::fs::read_to_string(&self.state_path).map_err(|e| StorageError::Read {
                path: self.state_path.clone(),
                source: Box::new(e),
            })?;

        serde_json::from_str(&content).map_err(|e| StorageError::Read {
            path: self.state_path.clone(),
            source: Box::new(e),
        })
    }

    /// Load, substituting the default state on failure with a warning on
    /// stderr. A corrupted blob loads exactly like a missing one.
    pub fn load_or_default(&self) -> AppData {
        match self.load() {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Warning: {}", e);
                eprintln!("Starting with a fresh state.");
                AppData::default()
            }
        }
    }

    /// Serialize and write the full state atomically. A failure leaves the
    /// previously persisted file unchanged.
    pub fn save(&self, data: &AppData) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(data).map_err(|e| StorageError::Write {
            path: self.state_path.clone(),
            source: Box::new(e),
        })?;

        atomic_write(&self.state_path, &json).map_err(|e| StorageError::Write {
            path: self.state_path.clone(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomTask, TaskCategory, UserSettings, WorkMode};
    use chrono::{Local, TimeZone};
    use pretty_assertions::assert_eq;

    fn temp_store(dir: &tempfile::TempDir) -> Store {
        Store::new(dir.path().join("state.json"))
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let data = store.load().unwrap();
        assert!(data.history.is_empty());
        assert!(data.custom_tasks.is_empty());
        assert_eq!(data.settings.work_mode, WorkMode::Wfh);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        let created = Local.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap();

        let mut data = AppData::default();
        data.settings = UserSettings::with_start(created);
        data.settings.name = "Sam".to_string();
        data.settings.work_mode = WorkMode::Office;
        data.day_mut("2024-01-01").completed_task_ids = vec!["m1".to_string(), "off2".to_string()];
        data.day_mut("2024-01-01").score = 13.0;
        data.custom_tasks.push(CustomTask::new(
            "Stretch".to_string(),
            String::new(),
            TaskCategory::Evening,
            created,
            &[],
        ));

        store.save(&data).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_load_corrupt_blob_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        std::fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
    }

    #[test]
    fn test_corrupt_blob_defaults_like_missing_blob() {
        let dir = tempfile::tempdir().unwrap();
        let corrupt = temp_store(&dir);
        std::fs::write(corrupt.path(), "{ not json").unwrap();

        let missing = Store::new(dir.path().join("absent.json"));

        let from_corrupt = corrupt.load_or_default();
        let from_missing = missing.load_or_default();

        // Start dates are both "now", the rest must match exactly
        assert_eq!(from_corrupt.history, from_missing.history);
        assert_eq!(from_corrupt.custom_tasks, from_missing.custom_tasks);
        assert_eq!(from_corrupt.settings.name, from_missing.settings.name);
        assert_eq!(from_corrupt.settings.goal, from_missing.settings.goal);
        assert_eq!(
            from_corrupt.settings.work_mode,
            from_missing.settings.work_mode
        );
    }

    #[test]
    fn test_save_into_missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("no-such-dir").join("state.json"));

        let err = store.save(&AppData::default()).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }
}
