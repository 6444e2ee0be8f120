//! Field identifiers for the preferences form

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which input widget kind edits a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text entry
    Text,
    /// On/off toggle
    Boolean,
    /// Slider over a bounded numeric range
    Range,
}

/// Stable identifier for each editable preference.
///
/// The keys double as the persisted record layout, so they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Email,
    FirstName,
    LastName,
    DownloadMaps,
    BecomeDiscrete,
    MapZoomLevel,
    ImageWidth,
}

impl FieldId {
    /// Every field, in form display order
    pub const ALL: [Self; 7] = [
        Self::Email,
        Self::FirstName,
        Self::LastName,
        Self::DownloadMaps,
        Self::BecomeDiscrete,
        Self::MapZoomLevel,
        Self::ImageWidth,
    ];

    /// Persisted key
    pub const fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::DownloadMaps => "download_maps",
            Self::BecomeDiscrete => "become_discrete",
            Self::MapZoomLevel => "map_zoom_level",
            Self::ImageWidth => "image_width",
        }
    }

    /// Human readable label for form rows
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::DownloadMaps => "Download Maps",
            Self::BecomeDiscrete => "Become Discrete",
            Self::MapZoomLevel => "Map Zoom Level",
            Self::ImageWidth => "Image Width",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Email | Self::FirstName | Self::LastName => FieldKind::Text,
            Self::DownloadMaps | Self::BecomeDiscrete => FieldKind::Boolean,
            Self::MapZoomLevel | Self::ImageWidth => FieldKind::Range,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| Error::InvalidInput(format!("unknown field: {key}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for field in FieldId::ALL {
            assert_eq!(field.key().parse::<FieldId>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!("zoom".parse::<FieldId>().is_err());
    }

    #[test]
    fn kinds_match_widget_types() {
        assert_eq!(FieldId::Email.kind(), FieldKind::Text);
        assert_eq!(FieldId::LastName.kind(), FieldKind::Text);
        assert_eq!(FieldId::BecomeDiscrete.kind(), FieldKind::Boolean);
        assert_eq!(FieldId::ImageWidth.kind(), FieldKind::Range);
    }

    #[test]
    fn serde_names_match_keys() {
        for field in FieldId::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json.trim_matches('"'), field.key());
        }
    }
}
