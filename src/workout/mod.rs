//! Workout logging
//!
//! The session being trained and the rest timer used between sets.

mod rest_timer;
mod session;

pub use rest_timer::{RestTimer, DEFAULT_REST_SECS, REST_PRESETS};
pub use session::WorkoutSession;
