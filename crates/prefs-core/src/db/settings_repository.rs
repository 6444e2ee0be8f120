//! Preferences store implementations

use std::collections::HashMap;

use crate::error::Result;
use crate::models::{FieldId, Settings};
use crate::util::parse_flag;
use rusqlite::{params, Connection};

/// Load/save of the committed preferences snapshot
pub trait PreferencesStore {
    /// Load the last committed snapshot
    ///
    /// Never fails: missing or unreadable state yields [`Settings::default`].
    fn load(&self) -> Settings;

    /// Persist a snapshot, all-or-nothing
    fn save(&self, settings: &Settings) -> Result<()>;
}

impl<T: PreferencesStore + ?Sized> PreferencesStore for &T {
    fn load(&self) -> Settings {
        (**self).load()
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        (**self).save(settings)
    }
}

/// SQLite implementation of `PreferencesStore`
pub struct SqlitePreferencesStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqlitePreferencesStore<'a> {
    /// Create a new store with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Load the snapshot, reporting database errors instead of defaulting
    pub fn try_load(&self) -> Result<Settings> {
        let mut stmt = self.conn.prepare("SELECT key, value FROM preferences")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
            .collect::<rusqlite::Result<HashMap<String, String>>>()?;

        Ok(decode(&rows))
    }
}

impl PreferencesStore for SqlitePreferencesStore<'_> {
    fn load(&self) -> Settings {
        match self.try_load() {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!("Failed to load preferences, using defaults: {error}");
                Settings::default()
            }
        }
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        // Dropping the transaction on an early return rolls every row back
        let tx = self.conn.unchecked_transaction()?;
        for (field, value) in encode(settings) {
            tx.execute(
                "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
                params![field.key(), value],
            )?;
        }
        tx.commit()?;
        tracing::debug!("Saved preferences to SQLite");
        Ok(())
    }
}

fn encode(settings: &Settings) -> [(FieldId, String); 7] {
    [
        (FieldId::Email, settings.email.clone()),
        (FieldId::FirstName, settings.first_name.clone()),
        (FieldId::LastName, settings.last_name.clone()),
        (FieldId::DownloadMaps, settings.download_maps.to_string()),
        (FieldId::BecomeDiscrete, settings.become_discrete.to_string()),
        (FieldId::MapZoomLevel, settings.map_zoom_level.to_string()),
        (FieldId::ImageWidth, settings.image_width.to_string()),
    ]
}

fn decode(rows: &HashMap<String, String>) -> Settings {
    let mut settings = Settings::default();
    let value = |field: FieldId| rows.get(field.key());

    if let Some(value) = value(FieldId::Email) {
        settings.email.clone_from(value);
    }
    if let Some(value) = value(FieldId::FirstName) {
        settings.first_name.clone_from(value);
    }
    if let Some(value) = value(FieldId::LastName) {
        settings.last_name.clone_from(value);
    }
    if let Some(value) = value(FieldId::DownloadMaps) {
        settings.download_maps = parse_flag(value);
    }
    if let Some(value) = value(FieldId::BecomeDiscrete) {
        settings.become_discrete = parse_flag(value);
    }
    if let Some(value) = value(FieldId::MapZoomLevel) {
        match value.trim().parse() {
            Ok(level) => settings.map_zoom_level = level,
            Err(_) => tracing::warn!("Ignoring stored map_zoom_level {value:?}"),
        }
    }
    if let Some(value) = value(FieldId::ImageWidth) {
        match value.trim().parse() {
            Ok(width) => settings.image_width = width,
            Err(_) => tracing::warn!("Ignoring stored image_width {value:?}"),
        }
    }

    settings.normalized()
}
