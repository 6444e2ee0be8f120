//! Persistence layer for Prefs

mod connection;
mod json_store;
mod schema;
mod settings_repository;

pub use connection::Database;
pub use json_store::JsonFilePreferencesStore;
pub use settings_repository::{PreferencesStore, SqlitePreferencesStore};
