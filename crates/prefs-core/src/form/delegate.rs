//! Callbacks invoked by input widgets when the user changes a field.
//!
//! Each widget kind only knows the field id it was configured with and the
//! raw value; the receiver decides what the change means.

use crate::models::FieldId;

use super::FormError;

/// Called by text-entry widgets
pub trait TextFieldDelegate {
    fn on_text_changed(&mut self, field: FieldId, value: &str) -> Result<(), FormError>;
}

/// Called by on/off toggle widgets
pub trait BooleanFieldDelegate {
    fn on_boolean_changed(&mut self, field: FieldId, value: bool) -> Result<(), FormError>;
}

/// Called by slider widgets
pub trait SliderFieldDelegate {
    fn on_range_changed(&mut self, field: FieldId, value: f64) -> Result<(), FormError>;
}
