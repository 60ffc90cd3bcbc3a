pub mod health;
pub mod levels;
pub mod matches;
pub mod status;

pub use health::{health_check, metrics_endpoint, readiness_check, root};
