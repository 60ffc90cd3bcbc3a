pub mod levels;
pub mod matches;
pub mod status;

pub use levels::LevelCreate;
pub use matches::MatchResultCreate;
pub use status::StatusCheckCreate;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
