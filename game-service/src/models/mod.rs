pub mod level;
pub mod match_result;
pub mod status_check;

pub use level::{
    Level, PlatformAxis, PlatformKind, Point, Platform, Rect, Spike, SpikeDirection,
};
pub use match_result::{MatchMode, MatchResult, Winner};
pub use status_check::StatusCheck;
