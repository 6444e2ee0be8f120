//! Form controller: one editing session over the preferences snapshot

use crate::db::PreferencesStore;
use crate::error::Error;
use crate::models::{FieldId, FieldKind, Settings};
use crate::validation::EmailError;

use super::delegate::{BooleanFieldDelegate, SliderFieldDelegate, TextFieldDelegate};
use super::host::{Alert, AlertPresenter, SessionObserver};
use super::{FormError, FormState};

/// Result of a confirm request that reached the validation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Saved; the session is over
    Committed,
    /// The email is malformed; the session stays open
    InvalidEmail(EmailError),
    /// The store refused the snapshot; the session stays open
    StorageFailed(String),
}

/// Orchestrates a single preferences editing session.
///
/// The working copy is hydrated from the store when the form opens and is
/// only written back by a successful [`confirm`](Self::confirm). Collaborators
/// are owned by the controller for the lifetime of the session.
pub struct FormController<S, H> {
    store: S,
    host: H,
    original: Settings,
    working: Settings,
    state: FormState,
    pending_alert: Option<Alert>,
}

impl<S, H> FormController<S, H>
where
    S: PreferencesStore,
    H: AlertPresenter + SessionObserver,
{
    /// Open a session with a working copy of the committed snapshot
    pub fn open(store: S, host: H) -> Self {
        let original = store.load();
        tracing::debug!("Opened preferences form");
        Self {
            store,
            host,
            working: original.clone(),
            original,
            state: FormState::Editing,
            pending_alert: None,
        }
    }

    pub const fn state(&self) -> FormState {
        self.state
    }

    /// The in-progress edits
    pub const fn working(&self) -> &Settings {
        &self.working
    }

    /// The snapshot the session started from
    pub const fn original(&self) -> &Settings {
        &self.original
    }

    /// Whether the working copy differs from the snapshot the session started from
    pub fn is_dirty(&self) -> bool {
        self.working != self.original
    }

    /// The alert currently shown by the host, if any
    pub const fn pending_alert(&self) -> Option<&Alert> {
        self.pending_alert.as_ref()
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    /// The host dismissed the current alert
    pub fn acknowledge_alert(&mut self) -> Option<Alert> {
        self.pending_alert.take()
    }

    /// Validate the email and, if it passes, persist the working copy.
    pub fn confirm(&mut self) -> Result<ConfirmOutcome, FormError> {
        self.ensure_editing()?;
        if self.pending_alert.as_ref().is_some_and(Alert::is_blocking) {
            return Err(FormError::AlertPending);
        }
        self.pending_alert = None;

        if let Err(error) = self.working.validate() {
            tracing::warn!("Rejected preferences: {error}");
            self.raise(Alert::invalid_email(format!(
                "Please enter a valid email address ({error})."
            )));
            return Ok(ConfirmOutcome::InvalidEmail(error));
        }

        match self.store.save(&self.working) {
            Ok(()) => {
                self.original = self.working.clone();
                self.state = FormState::Committed;
                tracing::info!("Preferences committed");
                self.host.on_committed(&self.working);
                Ok(ConfirmOutcome::Committed)
            }
            Err(error) => {
                tracing::error!("Failed to save preferences: {error}");
                let message = error.to_string();
                self.raise(Alert::storage_failure(message.clone()));
                Ok(ConfirmOutcome::StorageFailed(message))
            }
        }
    }

    /// Drop the working copy without validating or persisting anything.
    pub fn cancel(&mut self) -> Result<(), FormError> {
        self.ensure_editing()?;
        self.pending_alert = None;
        self.working = self.original.clone();
        self.state = FormState::Discarded;
        tracing::info!("Preferences edits discarded");
        self.host.on_discarded();
        Ok(())
    }

    /// Tear down the session and hand back its collaborators
    pub fn into_parts(self) -> (S, H) {
        (self.store, self.host)
    }

    fn ensure_editing(&self) -> Result<(), FormError> {
        if self.state.is_terminal() {
            Err(FormError::SessionClosed(self.state))
        } else {
            Ok(())
        }
    }

    fn raise(&mut self, alert: Alert) {
        self.host.present(&alert);
        self.pending_alert = Some(alert);
    }
}

fn kind_mismatch(field: FieldId, actual: FieldKind) -> FormError {
    FormError::FieldKindMismatch {
        field,
        expected: field.kind(),
        actual,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn zoom_from_slider(value: f64) -> Result<i32, Error> {
    if value.is_nan() {
        return Err(Error::InvalidInput("zoom level must be a number".into()));
    }
    // Float to int casts saturate, so infinities land on i32 bounds before clamping
    Ok(value.round() as i32)
}

impl<S, H> TextFieldDelegate for FormController<S, H>
where
    S: PreferencesStore,
    H: AlertPresenter + SessionObserver,
{
    fn on_text_changed(&mut self, field: FieldId, value: &str) -> Result<(), FormError> {
        self.ensure_editing()?;
        match field {
            FieldId::Email => self.working.set_email(value),
            FieldId::FirstName => self.working.set_first_name(value),
            FieldId::LastName => self.working.set_last_name(value),
            other => return Err(kind_mismatch(other, FieldKind::Text)),
        }
        tracing::debug!(field = %field, "Text field changed");
        Ok(())
    }
}

impl<S, H> BooleanFieldDelegate for FormController<S, H>
where
    S: PreferencesStore,
    H: AlertPresenter + SessionObserver,
{
    fn on_boolean_changed(&mut self, field: FieldId, value: bool) -> Result<(), FormError> {
        self.ensure_editing()?;
        match field {
            FieldId::DownloadMaps => self.working.set_download_maps(value),
            FieldId::BecomeDiscrete => self.working.set_become_discrete(value),
            other => return Err(kind_mismatch(other, FieldKind::Boolean)),
        }
        tracing::debug!(field = %field, value, "Toggle changed");
        Ok(())
    }
}

impl<S, H> SliderFieldDelegate for FormController<S, H>
where
    S: PreferencesStore,
    H: AlertPresenter + SessionObserver,
{
    fn on_range_changed(&mut self, field: FieldId, value: f64) -> Result<(), FormError> {
        self.ensure_editing()?;
        match field {
            FieldId::MapZoomLevel => self.working.set_map_zoom_level(zoom_from_slider(value)?),
            FieldId::ImageWidth => self.working.set_image_width(value)?,
            other => return Err(kind_mismatch(other, FieldKind::Range)),
        }
        tracing::debug!(field = %field, value, "Slider changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::db::{Database, SqlitePreferencesStore};
    use crate::form::AlertKind;
    use crate::models::DEFAULT_MAP_ZOOM_LEVEL;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingHost {
        alerts: Vec<Alert>,
        committed: Vec<Settings>,
        discarded: usize,
    }

    impl AlertPresenter for RecordingHost {
        fn present(&mut self, alert: &Alert) {
            self.alerts.push(alert.clone());
        }
    }

    impl SessionObserver for RecordingHost {
        fn on_committed(&mut self, committed: &Settings) {
            self.committed.push(committed.clone());
        }

        fn on_discarded(&mut self) {
            self.discarded += 1;
        }
    }

    /// In-memory store whose saves can be made to fail
    #[derive(Default)]
    struct MemoryStore {
        snapshot: RefCell<Option<Settings>>,
        fail_saves: Cell<bool>,
        save_calls: Cell<usize>,
    }

    impl MemoryStore {
        fn with(settings: Settings) -> Self {
            Self {
                snapshot: RefCell::new(Some(settings)),
                ..Self::default()
            }
        }
    }

    impl PreferencesStore for MemoryStore {
        fn load(&self) -> Settings {
            self.snapshot.borrow().clone().unwrap_or_default()
        }

        fn save(&self, settings: &Settings) -> crate::Result<()> {
            self.save_calls.set(self.save_calls.get() + 1);
            if self.fail_saves.get() {
                return Err(Error::Storage("disk full".to_string()));
            }
            *self.snapshot.borrow_mut() = Some(settings.clone());
            Ok(())
        }
    }

    fn committed() -> Settings {
        Settings {
            email: "old@example.com".to_string(),
            first_name: "Old".to_string(),
            last_name: "Name".to_string(),
            download_maps: true,
            become_discrete: false,
            map_zoom_level: 12,
            image_width: 600.0,
        }
    }

    #[test]
    fn opens_with_copy_of_committed_snapshot() {
        let store = MemoryStore::with(committed());
        let form = FormController::open(&store, RecordingHost::default());

        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.working(), &committed());
        assert!(!form.is_dirty());
    }

    #[test]
    fn opens_with_defaults_when_nothing_committed() {
        let store = MemoryStore::default();
        let form = FormController::open(&store, RecordingHost::default());

        assert!(!form.working().download_maps);
        assert_eq!(form.working().map_zoom_level, DEFAULT_MAP_ZOOM_LEVEL);
    }

    #[test]
    fn edits_do_not_touch_persisted_state() {
        let store = MemoryStore::with(committed());
        let mut form = FormController::open(&store, RecordingHost::default());

        form.on_text_changed(FieldId::FirstName, "New").unwrap();
        form.on_boolean_changed(FieldId::DownloadMaps, false).unwrap();

        assert!(form.is_dirty());
        assert_eq!(store.load(), committed());
        assert_eq!(store.save_calls.get(), 0);
    }

    #[test]
    fn delegates_dispatch_to_matching_fields() {
        let store = MemoryStore::default();
        let mut form = FormController::open(&store, RecordingHost::default());

        form.on_text_changed(FieldId::Email, "a@b.co").unwrap();
        form.on_text_changed(FieldId::FirstName, "Ada").unwrap();
        form.on_text_changed(FieldId::LastName, "Lovelace").unwrap();
        form.on_boolean_changed(FieldId::DownloadMaps, true).unwrap();
        form.on_boolean_changed(FieldId::BecomeDiscrete, true).unwrap();
        form.on_range_changed(FieldId::MapZoomLevel, 7.6).unwrap();
        form.on_range_changed(FieldId::ImageWidth, 512.0).unwrap();

        assert_eq!(
            form.working(),
            &Settings {
                email: "a@b.co".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                download_maps: true,
                become_discrete: true,
                map_zoom_level: 8,
                image_width: 512.0,
            }
        );
    }

    #[test]
    fn wrong_widget_kind_is_rejected_without_change() {
        let store = MemoryStore::with(committed());
        let mut form = FormController::open(&store, RecordingHost::default());

        let error = form
            .on_text_changed(FieldId::DownloadMaps, "true")
            .unwrap_err();
        assert!(matches!(
            error,
            FormError::FieldKindMismatch {
                field: FieldId::DownloadMaps,
                expected: FieldKind::Boolean,
                actual: FieldKind::Text,
            }
        ));
        assert!(form.on_boolean_changed(FieldId::Email, true).is_err());
        assert!(form.on_range_changed(FieldId::LastName, 3.0).is_err());
        assert!(!form.is_dirty());
    }

    #[test]
    fn sliders_clamp_out_of_range_values() {
        let store = MemoryStore::default();
        let mut form = FormController::open(&store, RecordingHost::default());

        for (input, expected) in [
            (-100.0, 1),
            (0.4, 1),
            (25.0, 21),
            (f64::INFINITY, 21),
            (f64::NEG_INFINITY, 1),
        ] {
            form.on_range_changed(FieldId::MapZoomLevel, input).unwrap();
            assert_eq!(form.working().map_zoom_level, expected, "input {input}");
        }

        for (input, expected) in [(0.0, 200.0), (5000.0, 1024.0)] {
            form.on_range_changed(FieldId::ImageWidth, input).unwrap();
            assert!((form.working().image_width - expected).abs() < f64::EPSILON);
        }

        assert!(form
            .on_range_changed(FieldId::MapZoomLevel, f64::NAN)
            .is_err());
        assert_eq!(form.working().map_zoom_level, 1);
    }

    #[test]
    fn invalid_email_raises_blocking_alert_and_stays_editing() {
        let store = MemoryStore::default();
        let mut form = FormController::open(&store, RecordingHost::default());

        form.on_text_changed(FieldId::Email, "bad-address").unwrap();
        let outcome = form.confirm().unwrap();

        assert_eq!(outcome, ConfirmOutcome::InvalidEmail(EmailError::MissingAt));
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.working().email, "bad-address");
        assert_eq!(store.save_calls.get(), 0);

        let alerts = &form.host().alerts;
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::InvalidEmail);
        assert!(form.pending_alert().is_some_and(Alert::is_blocking));
    }

    #[test]
    fn confirm_waits_for_blocking_alert_acknowledgement() {
        let store = MemoryStore::default();
        let mut form = FormController::open(&store, RecordingHost::default());

        form.on_text_changed(FieldId::Email, "bad-address").unwrap();
        form.confirm().unwrap();
        form.on_text_changed(FieldId::Email, "user@example.com").unwrap();

        assert!(matches!(form.confirm(), Err(FormError::AlertPending)));

        let acknowledged = form.acknowledge_alert().unwrap();
        assert_eq!(acknowledged.kind, AlertKind::InvalidEmail);
        assert_eq!(form.confirm().unwrap(), ConfirmOutcome::Committed);
        assert_eq!(store.load().email, "user@example.com");
    }

    #[test]
    fn valid_confirm_commits_and_signals_once() {
        let store = MemoryStore::default();
        let mut form = FormController::open(&store, RecordingHost::default());

        form.on_text_changed(FieldId::Email, "user@example.com").unwrap();
        form.on_text_changed(FieldId::FirstName, "A").unwrap();
        let at_confirm = form.working().clone();

        assert_eq!(form.confirm().unwrap(), ConfirmOutcome::Committed);
        assert_eq!(form.state(), FormState::Committed);

        let (_, host) = form.into_parts();
        assert_eq!(host.committed, vec![at_confirm.clone()]);
        assert_eq!(host.discarded, 0);
        assert!(host.alerts.is_empty());

        let loaded = store.load();
        assert_eq!(loaded, at_confirm);
        assert_eq!(loaded.first_name, "A");
    }

    #[test]
    fn storage_failure_keeps_session_and_snapshot() {
        let store = MemoryStore::with(committed());
        store.fail_saves.set(true);
        let mut form = FormController::open(&store, RecordingHost::default());

        form.on_text_changed(FieldId::Email, "new@example.com").unwrap();
        form.on_range_changed(FieldId::MapZoomLevel, 3.0).unwrap();
        let before = form.working().clone();

        let outcome = form.confirm().unwrap();
        assert!(matches!(outcome, ConfirmOutcome::StorageFailed(ref msg) if msg.contains("disk full")));
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.working(), &before);
        assert_eq!(store.load(), committed());

        let alert = form.pending_alert().unwrap();
        assert_eq!(alert.kind, AlertKind::StorageFailure);
        assert!(!alert.is_blocking());
        assert!(form.host().committed.is_empty());
    }

    #[test]
    fn retry_after_storage_failure_commits() {
        let store = MemoryStore::with(committed());
        store.fail_saves.set(true);
        let mut form = FormController::open(&store, RecordingHost::default());
        form.on_text_changed(FieldId::LastName, "Retry").unwrap();

        form.confirm().unwrap();
        store.fail_saves.set(false);

        assert_eq!(form.confirm().unwrap(), ConfirmOutcome::Committed);
        assert_eq!(store.save_calls.get(), 2);
        assert_eq!(store.load().last_name, "Retry");
        assert!(form.pending_alert().is_none());
    }

    #[test]
    fn cancel_discards_every_edit() {
        let store = MemoryStore::with(committed());
        let mut form = FormController::open(&store, RecordingHost::default());

        for round in 0..20_i32 {
            form.on_text_changed(FieldId::Email, &format!("edit{round}"))
                .unwrap();
            form.on_boolean_changed(FieldId::BecomeDiscrete, round % 2 == 0)
                .unwrap();
            form.on_range_changed(FieldId::ImageWidth, f64::from(round) * 50.0)
                .unwrap();
        }
        form.cancel().unwrap();

        assert_eq!(form.state(), FormState::Discarded);
        assert_eq!(store.save_calls.get(), 0);
        assert_eq!(store.load(), committed());
        assert_eq!(form.host().discarded, 1);
        assert!(form.host().alerts.is_empty());
    }

    #[test]
    fn cancel_skips_validation_even_with_pending_alert() {
        let store = MemoryStore::default();
        let mut form = FormController::open(&store, RecordingHost::default());

        form.on_text_changed(FieldId::Email, "nope").unwrap();
        form.confirm().unwrap();
        form.cancel().unwrap();

        assert_eq!(form.state(), FormState::Discarded);
        assert!(form.pending_alert().is_none());
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn closed_session_rejects_further_operations() {
        let store = MemoryStore::default();
        let mut form = FormController::open(&store, RecordingHost::default());
        form.cancel().unwrap();

        assert!(matches!(
            form.cancel(),
            Err(FormError::SessionClosed(FormState::Discarded))
        ));
        assert!(matches!(
            form.confirm(),
            Err(FormError::SessionClosed(FormState::Discarded))
        ));
        assert!(form.on_text_changed(FieldId::Email, "x").is_err());
        assert_eq!(form.host().discarded, 1);
    }

    #[test]
    fn commit_round_trip_through_sqlite() {
        let db = Database::open_in_memory().unwrap();
        let store = SqlitePreferencesStore::new(db.connection());

        let mut form = FormController::open(&store, RecordingHost::default());
        form.on_text_changed(FieldId::Email, "user@example.com").unwrap();
        form.on_text_changed(FieldId::FirstName, "A").unwrap();
        form.on_boolean_changed(FieldId::DownloadMaps, true).unwrap();
        form.on_range_changed(FieldId::ImageWidth, 333.0).unwrap();
        let at_confirm = form.working().clone();
        assert_eq!(form.confirm().unwrap(), ConfirmOutcome::Committed);

        assert_eq!(store.load(), at_confirm);

        let mut next = FormController::open(&store, RecordingHost::default());
        assert_eq!(next.working(), &at_confirm);
        next.on_text_changed(FieldId::FirstName, "B").unwrap();
        next.cancel().unwrap();
        assert_eq!(store.load().first_name, "A");
    }
}
