//! Flat JSON file backend

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::Result;
use crate::models::Settings;
use crate::util::ensure_parent_dir;

use super::PreferencesStore;

/// Stores the committed snapshot as one JSON object keyed by field id
#[derive(Debug, Clone)]
pub struct JsonFilePreferencesStore {
    path: PathBuf,
}

impl JsonFilePreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, reporting read and parse errors instead of defaulting
    ///
    /// Returns `Ok(None)` when nothing has been committed yet.
    pub fn try_load(&self) -> Result<Option<Settings>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.path)?;
        let settings = serde_json::from_str::<Settings>(&raw)?;
        Ok(Some(settings.normalized()))
    }

    /// Directory that holds the snapshot and its in-flight temp files
    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl PreferencesStore for JsonFilePreferencesStore {
    fn load(&self) -> Settings {
        match self.try_load() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                tracing::debug!("No preferences at {:?}, using defaults", self.path);
                Settings::default()
            }
            Err(error) => {
                tracing::warn!(
                    "Failed to load preferences from {:?}, using defaults: {error}",
                    self.path
                );
                Settings::default()
            }
        }
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        let contents = serde_json::to_string_pretty(settings)?;

        // Each save gets its own temp file in the same directory, so the
        // rename is atomic and concurrent writers never share a buffer.
        // The temp file is removed on drop if anything below fails.
        let mut temp = NamedTempFile::new_in(self.dir())?;
        temp.write_all(contents.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|error| error.error)?;

        tracing::debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}
