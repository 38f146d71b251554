//! Data models
//!
//! Rust structs for reference data, in-memory logs and stored records.

mod exercise;
mod food_item;
mod food_log;
mod goals;
mod meal;
mod nutrition;
mod profile;
pub mod validation;
mod weight_log;
mod workout;

pub use exercise::{Exercise, MuscleGroup};
pub use food_item::{FoodCategory, FoodItem};
pub use food_log::FoodLogEntry;
pub use goals::UserGoals;
pub use meal::{FoodEntry, FoodEntryCreate, Meal};
pub use nutrition::Nutrition;
pub use profile::Profile;
pub use validation::ValidationError;
pub use weight_log::{WeightLog, WeightLogCreate};
pub use workout::{ExerciseEntry, WorkoutLog, WorkoutLogCreate, WorkoutSet};
