use std::io::Write;

use prefs_core::db::PreferencesStore;
use prefs_core::form::{
    BooleanFieldDelegate, ConfirmOutcome, FieldKind, SliderFieldDelegate, TextFieldDelegate,
};
use prefs_core::models::FieldId;
use prefs_core::util::parse_bool;
use prefs_core::{FormController, FormError, FormState};

use crate::cli::EditArgs;
use crate::error::CliError;
use crate::host::ConsoleHost;

/// One widget-level change, routed to the delegate for its kind
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Text(FieldId, String),
    Boolean(FieldId, bool),
    Range(FieldId, f64),
}

pub fn run_edit(args: &EditArgs, store: &impl PreferencesStore) -> Result<(), CliError> {
    let state = edit_session(args, store, ConsoleHost::stderr())?;
    tracing::debug!("Edit session ended: {state}");
    Ok(())
}

/// Open a form, replay the requested edits, then confirm or cancel.
///
/// A rejected confirm is acknowledged and the session cancelled, since there
/// is no way to correct the input interactively.
pub fn edit_session<S, W>(
    args: &EditArgs,
    store: S,
    host: ConsoleHost<W>,
) -> Result<FormState, CliError>
where
    S: PreferencesStore,
    W: Write,
{
    let changes = collect_changes(args)?;
    let mut form = FormController::open(store, host);

    if let Err(error) = apply_changes(&mut form, &changes) {
        form.cancel()?;
        return Err(error.into());
    }

    if args.cancel {
        form.cancel()?;
        return Ok(form.state());
    }

    let reason = match form.confirm()? {
        ConfirmOutcome::Committed => return Ok(form.state()),
        ConfirmOutcome::InvalidEmail(error) => error.to_string(),
        ConfirmOutcome::StorageFailed(message) => message,
    };
    form.acknowledge_alert();
    form.cancel()?;
    Err(CliError::NotSaved(reason))
}

pub fn apply_changes<F>(form: &mut F, changes: &[FieldChange]) -> Result<(), FormError>
where
    F: TextFieldDelegate + BooleanFieldDelegate + SliderFieldDelegate,
{
    for change in changes {
        match change {
            FieldChange::Text(field, value) => form.on_text_changed(*field, value)?,
            FieldChange::Boolean(field, value) => form.on_boolean_changed(*field, *value)?,
            FieldChange::Range(field, value) => form.on_range_changed(*field, *value)?,
        }
    }
    Ok(())
}

/// Flags first in form order, then `--set` assignments in the order given
pub fn collect_changes(args: &EditArgs) -> Result<Vec<FieldChange>, CliError> {
    let mut changes = Vec::new();

    if let Some(email) = &args.email {
        changes.push(FieldChange::Text(FieldId::Email, email.clone()));
    }
    if let Some(first_name) = &args.first_name {
        changes.push(FieldChange::Text(FieldId::FirstName, first_name.clone()));
    }
    if let Some(last_name) = &args.last_name {
        changes.push(FieldChange::Text(FieldId::LastName, last_name.clone()));
    }
    if let Some(download_maps) = args.download_maps {
        changes.push(FieldChange::Boolean(FieldId::DownloadMaps, download_maps));
    }
    if let Some(discrete) = args.discrete {
        changes.push(FieldChange::Boolean(FieldId::BecomeDiscrete, discrete));
    }
    if let Some(zoom) = args.zoom {
        changes.push(FieldChange::Range(FieldId::MapZoomLevel, zoom));
    }
    if let Some(width) = args.image_width {
        changes.push(FieldChange::Range(FieldId::ImageWidth, width));
    }

    for assignment in &args.assignments {
        changes.push(parse_assignment(assignment)?);
    }

    Ok(changes)
}

pub fn parse_assignment(raw: &str) -> Result<FieldChange, CliError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::InvalidAssignment(raw.to_string()))?;
    let field = key.parse::<FieldId>()?;

    match field.kind() {
        FieldKind::Text => Ok(FieldChange::Text(field, value.to_string())),
        FieldKind::Boolean => parse_bool(value)
            .map(|flag| FieldChange::Boolean(field, flag))
            .ok_or_else(|| invalid_value(field, value, "expected true/false")),
        FieldKind::Range => value
            .trim()
            .parse::<f64>()
            .map(|number| FieldChange::Range(field, number))
            .map_err(|error| invalid_value(field, value, &error.to_string())),
    }
}

fn invalid_value(field: FieldId, value: &str, reason: &str) -> CliError {
    CliError::InvalidValue {
        field: field.key().to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
