//! prefs-core - Core library for Prefs
//!
//! This crate contains the settings model, email validation, the persistent
//! preferences stores, and the form controller that ties an editing session
//! together. Hosts (the CLI, or any UI shell) drive the form through its
//! field delegate traits.

pub mod db;
pub mod error;
pub mod form;
pub mod models;
pub mod util;
pub mod validation;

pub use error::{Error, Result};
pub use form::{ConfirmOutcome, FieldId, FormController, FormError, FormState};
pub use models::Settings;
pub use validation::{validate_email, EmailError, ValidEmail};
