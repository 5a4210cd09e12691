// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Axis label configuration shown on the quadrant canvas.

use serde::{Deserialize, Serialize};

/// The six user-editable labels describing the quadrant's meaning.
///
/// Each field defaults individually so a persisted file written by an older
/// build (or edited by hand) still loads with sensible labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default = "default_x_name")]
    pub x_name: String,
    #[serde(default = "default_x_left")]
    pub x_left: String,
    #[serde(default = "default_x_right")]
    pub x_right: String,
    #[serde(default = "default_y_name")]
    pub y_name: String,
    #[serde(default = "default_y_top")]
    pub y_top: String,
    #[serde(default = "default_y_bottom")]
    pub y_bottom: String,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            x_name: default_x_name(),
            x_left: default_x_left(),
            x_right: default_x_right(),
            y_name: default_y_name(),
            y_top: default_y_top(),
            y_bottom: default_y_bottom(),
        }
    }
}

/// Identifies one of the six axis labels when routing edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisField {
    XName,
    XLeft,
    XRight,
    YName,
    YTop,
    YBottom,
}

impl AxisConfig {
    /// Replace one label. Any string is accepted.
    pub fn set(&mut self, field: AxisField, text: String) {
        match field {
            AxisField::XName => self.x_name = text,
            AxisField::XLeft => self.x_left = text,
            AxisField::XRight => self.x_right = text,
            AxisField::YName => self.y_name = text,
            AxisField::YTop => self.y_top = text,
            AxisField::YBottom => self.y_bottom = text,
        }
    }
}

fn default_x_name() -> String {
    "X Axis".to_string()
}

fn default_x_left() -> String {
    "Left".to_string()
}

fn default_x_right() -> String {
    "Right".to_string()
}

fn default_y_name() -> String {
    "Y Axis".to_string()
}

fn default_y_top() -> String {
    "Top".to_string()
}

fn default_y_bottom() -> String {
    "Bottom".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_labels() {
        let axis = AxisConfig::default();
        assert_eq!(axis.x_name, "X Axis");
        assert_eq!(axis.x_left, "Left");
        assert_eq!(axis.x_right, "Right");
        assert_eq!(axis.y_name, "Y Axis");
        assert_eq!(axis.y_top, "Top");
        assert_eq!(axis.y_bottom, "Bottom");
    }

    #[test]
    fn missing_keys_fall_back_per_field() {
        let json = r#"{"x_name": "Effort", "y_top": "High impact"}"#;
        let axis: AxisConfig = serde_json::from_str(json).unwrap();
        assert_eq!(axis.x_name, "Effort");
        assert_eq!(axis.y_top, "High impact");
        assert_eq!(axis.x_left, "Left");
        assert_eq!(axis.y_bottom, "Bottom");
    }

    #[test]
    fn set_replaces_exactly_one_field() {
        let mut axis = AxisConfig::default();
        axis.set(AxisField::YName, "Impact".to_string());
        assert_eq!(axis.y_name, "Impact");
        assert_eq!(axis.x_name, "X Axis");
    }
}
