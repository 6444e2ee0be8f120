//! User preferences model

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validation::{validate_email, EmailError, ValidEmail};

/// Allowed map zoom levels
pub const MAP_ZOOM_LEVEL_RANGE: RangeInclusive<i32> = 1..=21;
/// Zoom level used when nothing has been committed yet
pub const DEFAULT_MAP_ZOOM_LEVEL: i32 = 10;

/// Allowed upload image widths in pixels
pub const IMAGE_WIDTH_RANGE: RangeInclusive<f64> = 200.0..=1024.0;
/// Image width used when nothing has been committed yet
pub const DEFAULT_IMAGE_WIDTH: f64 = 480.0;

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Contact email address, validated on commit
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Download map tiles for offline use
    pub download_maps: bool,
    /// Post reports anonymously
    pub become_discrete: bool,
    /// Initial zoom level for map views
    pub map_zoom_level: i32,
    /// Width uploaded photos are scaled to, in pixels
    pub image_width: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            download_maps: false,
            become_discrete: false,
            map_zoom_level: DEFAULT_MAP_ZOOM_LEVEL,
            image_width: DEFAULT_IMAGE_WIDTH,
        }
    }
}

impl Settings {
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_download_maps(&mut self, download_maps: bool) {
        self.download_maps = download_maps;
    }

    pub fn set_become_discrete(&mut self, become_discrete: bool) {
        self.become_discrete = become_discrete;
    }

    /// Set the zoom level, clamped to [`MAP_ZOOM_LEVEL_RANGE`].
    pub fn set_map_zoom_level(&mut self, level: i32) {
        self.map_zoom_level = clamp_zoom_level(level);
    }

    /// Set the image width, clamped to [`IMAGE_WIDTH_RANGE`].
    ///
    /// `NaN` has no nearest bound and is rejected without touching the
    /// current value.
    pub fn set_image_width(&mut self, width: f64) -> Result<()> {
        self.image_width = clamp_image_width(width)?;
        Ok(())
    }

    /// Check the fields that must hold before a commit.
    ///
    /// Only the email is constrained; everything else is kept in range by
    /// the setters.
    pub fn validate(&self) -> std::result::Result<ValidEmail, EmailError> {
        validate_email(&self.email)
    }

    /// Bring numeric fields back into range.
    ///
    /// Used when hydrating from storage that may have been written by hand.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.map_zoom_level = clamp_zoom_level(self.map_zoom_level);
        self.image_width = clamp_image_width(self.image_width).unwrap_or(DEFAULT_IMAGE_WIDTH);
        self
    }
}

/// Clamp a zoom level to the nearest allowed value.
pub fn clamp_zoom_level(level: i32) -> i32 {
    level.clamp(*MAP_ZOOM_LEVEL_RANGE.start(), *MAP_ZOOM_LEVEL_RANGE.end())
}

/// Clamp an image width to the nearest allowed value.
pub fn clamp_image_width(width: f64) -> Result<f64> {
    if width.is_nan() {
        return Err(Error::InvalidInput("image width must be a number".into()));
    }
    Ok(width.clamp(*IMAGE_WIDTH_RANGE.start(), *IMAGE_WIDTH_RANGE.end()))
}
