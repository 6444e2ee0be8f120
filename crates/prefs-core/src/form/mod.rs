//! Preferences editing form
//!
//! A [`FormController`] owns one editing session: it hydrates a working copy
//! from a [`PreferencesStore`](crate::db::PreferencesStore), receives edits
//! through the delegate traits, and ends either committed or discarded.

mod controller;
mod delegate;
mod host;

use std::fmt;

use thiserror::Error;

pub use crate::models::{FieldId, FieldKind};
pub use controller::{ConfirmOutcome, FormController};
pub use delegate::{BooleanFieldDelegate, SliderFieldDelegate, TextFieldDelegate};
pub use host::{Alert, AlertKind, AlertPresenter, SessionObserver};

/// Where an editing session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormState {
    /// Open; edits are accepted
    Editing,
    /// The working copy was persisted (terminal)
    Committed,
    /// The working copy was dropped (terminal)
    Discarded,
}

impl FormState {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Editing)
    }
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Editing => "editing",
            Self::Committed => "committed",
            Self::Discarded => "discarded",
        })
    }
}

/// Errors returned to the host by form operations
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Form session already {0}")]
    SessionClosed(FormState),

    #[error("Field {field} is edited by a {expected:?} widget, not {actual:?}")]
    FieldKindMismatch {
        field: FieldId,
        expected: FieldKind,
        actual: FieldKind,
    },

    #[error("An alert is awaiting acknowledgement")]
    AlertPending,

    #[error(transparent)]
    Core(#[from] crate::error::Error),
}
