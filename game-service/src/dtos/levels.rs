use crate::models::level::{DEFAULT_AUTHOR, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::models::{Level, Platform, Point, Rect, Spike};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

/// Level as submitted by the editor; everything but `name` is optional.
#[derive(Debug, Deserialize, Validate)]
pub struct LevelCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default = "default_width")]
    #[validate(range(min = 1, message = "width must be positive"))]
    pub width: u32,
    #[serde(default = "default_height")]
    #[validate(range(min = 1, message = "height must be positive"))]
    pub height: u32,
    #[serde(default = "Point::default_spawn")]
    pub spawn: Point,
    #[serde(default = "Rect::default_goal")]
    pub goal: Rect,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub spikes: Vec<Spike>,
    #[serde(default = "default_author")]
    pub author: String,
}

impl LevelCreate {
    pub fn into_level(self) -> Level {
        Level {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            width: self.width,
            height: self.height,
            spawn: self.spawn,
            goal: self.goal,
            platforms: self.platforms,
            spikes: self.spikes,
            created_at: Utc::now(),
            author: self.author,
        }
    }
}
