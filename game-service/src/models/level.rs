//! Level layout as authored in the in-game editor.
//!
//! Coordinates are canvas pixels with the origin at the top-left corner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: u32 = 960;
pub const DEFAULT_HEIGHT: u32 = 540;
pub const DEFAULT_AUTHOR: &str = "player";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn default_spawn() -> Self {
        Self { x: 50.0, y: 480.0 }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn default_goal() -> Self {
        Self {
            x: 860.0,
            y: 460.0,
            w: 40.0,
            h: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    #[default]
    Static,
    Moving,
    Collapsing,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlatformAxis {
    X,
    Y,
}

/// A solid surface. Moving platforms oscillate along `axis` by `range`
/// pixels around their original position; collapsing platforms fall
/// `delay` frames after being stepped on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Platform {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(rename = "type", default)]
    pub kind: PlatformKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<PlatformAxis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(rename = "originalX", default, skip_serializing_if = "Option::is_none")]
    pub original_x: Option<f64>,
    #[serde(rename = "originalY", default, skip_serializing_if = "Option::is_none")]
    pub original_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpikeDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

fn default_spike_size() -> f64 {
    20.0
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Spike {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_spike_size")]
    pub w: f64,
    #[serde(default = "default_spike_size")]
    pub h: f64,
    #[serde(default)]
    pub dir: SpikeDirection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Level {
    pub id: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub spawn: Point,
    pub goal: Rect,
    pub platforms: Vec<Platform>,
    pub spikes: Vec<Spike>,
    pub created_at: DateTime<Utc>,
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_moving_platform_keeps_client_field_names() {
        let platform = Platform {
            x: 100.0,
            y: 300.0,
            w: 120.0,
            h: 20.0,
            kind: PlatformKind::Moving,
            axis: Some(PlatformAxis::X),
            range: Some(100.0),
            speed: Some(2.0),
            original_x: Some(100.0),
            original_y: Some(300.0),
            delay: None,
        };

        let value = serde_json::to_value(&platform).expect("Failed to serialize");
        assert_eq!(value["type"], "moving");
        assert_eq!(value["axis"], "x");
        assert_eq!(value["originalX"], 100.0);
        assert_eq!(value["originalY"], 300.0);
        assert!(value.get("delay").is_none());
    }

    #[test]
    fn test_static_platform_is_the_default_kind() {
        let platform: Platform =
            serde_json::from_value(json!({ "x": 0, "y": 520, "w": 960, "h": 20 }))
                .expect("Failed to parse");

        assert_eq!(platform.kind, PlatformKind::Static);
        assert!(platform.axis.is_none());
    }

    #[test]
    fn test_spike_defaults() {
        let spike: Spike =
            serde_json::from_value(json!({ "x": 200, "y": 500 })).expect("Failed to parse");

        assert_eq!(spike.w, 20.0);
        assert_eq!(spike.h, 20.0);
        assert_eq!(spike.dir, SpikeDirection::Up);
    }

    #[test]
    fn test_unknown_platform_kind_is_rejected() {
        let result = serde_json::from_value::<Platform>(
            json!({ "x": 0, "y": 0, "w": 60, "h": 20, "type": "bouncy" }),
        );
        assert!(result.is_err());
    }
}
