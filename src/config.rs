use std::path::PathBuf;

use egui::Color32;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MARKER_RADIUS: f32 = 3.0;
pub const DEFAULT_CURVE_WIDTH: f32 = 2.0;

/// User-tunable editor settings. Persisted between runs through eframe storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorConfig {
    /// Radius of the control point markers. Also the drag hit radius.
    pub marker_radius: f32,
    pub curve_width: f32,
    pub curve_color: Color32,
    pub outline_color: Color32,
    pub background_path: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            marker_radius: DEFAULT_MARKER_RADIUS,
            curve_width: DEFAULT_CURVE_WIDTH,
            curve_color: Color32::BLACK,
            outline_color: Color32::BLACK,
            background_path: None,
        }
    }
}

impl EditorConfig {
    /// Replace unusable sizes (non-positive, NaN, infinite) with the defaults.
    pub fn validated(mut self) -> Self {
        if !(self.marker_radius.is_finite() && self.marker_radius > 0.0) {
            log::warn!("Invalid marker radius {}, using {}", self.marker_radius, DEFAULT_MARKER_RADIUS);
            self.marker_radius = DEFAULT_MARKER_RADIUS;
        }
        if !(self.curve_width.is_finite() && self.curve_width > 0.0) {
            log::warn!("Invalid curve width {}, using {}", self.curve_width, DEFAULT_CURVE_WIDTH);
            self.curve_width = DEFAULT_CURVE_WIDTH;
        }
        self
    }

    /// Override the background image, e.g. from the command line.
    pub fn with_background(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.background_path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_keeps_good_values() {
        let config = EditorConfig {
            marker_radius: 9.0,
            curve_width: 3.5,
            ..Default::default()
        };
        assert_eq!(config.clone().validated(), config);
    }

    #[test]
    fn test_validated_replaces_bad_values() {
        let config = EditorConfig {
            marker_radius: -1.0,
            curve_width: f32::NAN,
            ..Default::default()
        }
        .validated();
        assert_eq!(config.marker_radius, DEFAULT_MARKER_RADIUS);
        assert_eq!(config.curve_width, DEFAULT_CURVE_WIDTH);
    }

    #[test]
    fn test_with_background_only_overrides_when_given() {
        let config = EditorConfig {
            background_path: Some(PathBuf::from("map.png")),
            ..Default::default()
        };
        let kept = config.clone().with_background(None);
        assert_eq!(kept.background_path, Some(PathBuf::from("map.png")));

        let replaced = config.with_background(Some(PathBuf::from("other.jpg")));
        assert_eq!(replaced.background_path, Some(PathBuf::from("other.jpg")));
    }
}
