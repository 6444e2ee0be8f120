//! Data models for Prefs

mod field;
mod settings;

pub use field::{FieldId, FieldKind};
pub use settings::{
    clamp_image_width, clamp_zoom_level, Settings, DEFAULT_IMAGE_WIDTH, DEFAULT_MAP_ZOOM_LEVEL,
    IMAGE_WIDTH_RANGE, MAP_ZOOM_LEVEL_RANGE,
};
