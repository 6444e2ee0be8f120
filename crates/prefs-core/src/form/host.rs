//! Contracts the host UI shell implements for a form session

use serde::Serialize;

use crate::models::Settings;

/// What an alert is reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// The email field failed format validation
    InvalidEmail,
    /// The store could not persist the snapshot
    StorageFailure,
}

/// A single modal message whose only option is acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn invalid_email(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::InvalidEmail,
            title: "Invalid Email".to_string(),
            message: message.into(),
        }
    }

    pub fn storage_failure(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::StorageFailure,
            title: "Settings Not Saved".to_string(),
            message: message.into(),
        }
    }

    /// Blocking alerts must be acknowledged before the form accepts another confirm
    pub const fn is_blocking(&self) -> bool {
        matches!(self.kind, AlertKind::InvalidEmail)
    }
}

/// Displays alerts requested by the form.
///
/// Presentation must not block; the host reports the user's acknowledgement
/// back through `FormController::acknowledge_alert`.
pub trait AlertPresenter {
    fn present(&mut self, alert: &Alert);
}

/// Told once when the session ends so the host can dismiss the form
pub trait SessionObserver {
    /// The working copy became the persisted snapshot
    fn on_committed(&mut self, committed: &Settings);

    /// The working copy was dropped without persisting
    fn on_discarded(&mut self);
}
