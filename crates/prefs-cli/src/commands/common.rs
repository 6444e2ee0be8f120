use std::env;
use std::path::{Path, PathBuf};

use prefs_core::db::{
    Database, JsonFilePreferencesStore, PreferencesStore, SqlitePreferencesStore,
};
use prefs_core::models::FieldId;
use prefs_core::util::{ensure_parent_dir, normalize_text_option};
use prefs_core::Settings;

use crate::cli::Backend;
use crate::error::CliError;

pub fn resolve_store_path(
    cli_store_path: Option<PathBuf>,
    backend: Backend,
) -> Result<PathBuf, CliError> {
    if let Some(path) = cli_store_path {
        return Ok(path);
    }
    if let Some(path) = normalize_text_option(env::var("PREFS_STORE_PATH").ok()) {
        return Ok(PathBuf::from(path));
    }
    default_store_path(backend)
}

pub fn default_store_path(backend: Backend) -> Result<PathBuf, CliError> {
    let file_name = match backend {
        Backend::Sqlite => "preferences.db",
        Backend::Json => "preferences.json",
    };
    dirs::data_dir()
        .map(|dir| dir.join("prefs").join(file_name))
        .ok_or(CliError::NoDataDir)
}

/// A preferences store opened on the selected backend
pub enum OpenedStore {
    Sqlite(Database),
    Json(JsonFilePreferencesStore),
}

impl OpenedStore {
    pub fn open(backend: Backend, path: &Path) -> Result<Self, CliError> {
        match backend {
            Backend::Sqlite => {
                ensure_parent_dir(path)?;
                Ok(Self::Sqlite(Database::open(path)?))
            }
            Backend::Json => Ok(Self::Json(JsonFilePreferencesStore::new(path))),
        }
    }
}

impl PreferencesStore for OpenedStore {
    fn load(&self) -> Settings {
        match self {
            Self::Sqlite(db) => SqlitePreferencesStore::new(db.connection()).load(),
            Self::Json(store) => store.load(),
        }
    }

    fn save(&self, settings: &Settings) -> prefs_core::Result<()> {
        match self {
            Self::Sqlite(db) => SqlitePreferencesStore::new(db.connection()).save(settings),
            Self::Json(store) => store.save(settings),
        }
    }
}

pub fn format_field_value(settings: &Settings, field: FieldId) -> String {
    match field {
        FieldId::Email => settings.email.clone(),
        FieldId::FirstName => settings.first_name.clone(),
        FieldId::LastName => settings.last_name.clone(),
        FieldId::DownloadMaps => on_off(settings.download_maps).to_string(),
        FieldId::BecomeDiscrete => on_off(settings.become_discrete).to_string(),
        FieldId::MapZoomLevel => settings.map_zoom_level.to_string(),
        FieldId::ImageWidth => format!("{}px", settings.image_width),
    }
}

pub fn format_settings_lines(settings: &Settings) -> Vec<String> {
    let width = FieldId::ALL
        .iter()
        .map(|field| field.label().len())
        .max()
        .unwrap_or(0);

    FieldId::ALL
        .iter()
        .map(|&field| {
            let value = format_field_value(settings, field);
            let value = if value.is_empty() {
                "(not set)".to_string()
            } else {
                value
            };
            format!("{:<width$}  {value}", field.label())
        })
        .collect()
}

const fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
