//! Record store
//!
//! The persistence capability the trackers consume. Every call is scoped to
//! the user the store was opened for.

mod sqlite;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::db::DbError;
use crate::models::{
    ExerciseEntry, FoodEntry, FoodItem, Meal, MuscleGroup, Profile, UserGoals, ValidationError,
    WeightLog, WorkoutLog,
};

pub use sqlite::SqliteStore;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database error: {0}")]
    Database(DbError),

    #[error("Stored record could not be (de)serialized: {0}")]
    Serialization(serde_json::Error),
}

impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Json(e) => StoreError::Serialization(e),
            other => StoreError::Database(other),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Create/read/delete operations over the user's records
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Meals of one day with their entries, in creation order
    async fn list_meals(&self, date: NaiveDate) -> StoreResult<Vec<Meal>>;

    async fn create_meal(&self, name: &str, date: NaiveDate) -> StoreResult<Meal>;

    /// Delete a meal and, through the schema, all of its food entries
    async fn delete_meal(&self, id: i64) -> StoreResult<()>;

    /// Log `quantity` servings of `food` into a meal
    async fn add_food_entry(&self, meal_id: i64, food: &FoodItem, quantity: f64)
        -> StoreResult<FoodEntry>;

    async fn remove_food_entry(&self, id: i64) -> StoreResult<()>;

    /// All weight logs, oldest first
    async fn list_weight_logs(&self) -> StoreResult<Vec<WeightLog>>;

    async fn add_weight_log(&self, weight_kg: f64, notes: Option<&str>) -> StoreResult<WeightLog>;

    async fn delete_weight_log(&self, id: i64) -> StoreResult<()>;

    async fn get_goals(&self) -> StoreResult<Option<UserGoals>>;

    async fn upsert_goals(&self, goals: &UserGoals) -> StoreResult<UserGoals>;

    async fn get_profile(&self) -> StoreResult<Option<Profile>>;

    async fn upsert_profile(&self, height_cm: f64) -> StoreResult<Profile>;

    /// All workout logs, newest first
    async fn list_workout_logs(&self) -> StoreResult<Vec<WorkoutLog>>;

    /// Persist an exercise entry's sets (weights in kilograms)
    async fn add_workout_log(
        &self,
        entry: &ExerciseEntry,
        muscle_group: MuscleGroup,
        notes: Option<&str>,
    ) -> StoreResult<WorkoutLog>;

    async fn delete_workout_log(&self, id: i64) -> StoreResult<()>;
}
