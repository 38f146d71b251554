//! SQLite-backed record store

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::db::Database;
use crate::models::validation::{validate_positive, validate_quantity, validate_required};
use crate::models::{
    ExerciseEntry, FoodEntry, FoodEntryCreate, FoodItem, Meal, MuscleGroup, Profile, UserGoals,
    WeightLog, WeightLogCreate, WorkoutLog, WorkoutLogCreate,
};

use super::{RemoteStore, StoreError, StoreResult};

/// Record store over the local database, scoped to one user
#[derive(Clone)]
pub struct SqliteStore {
    database: Database,
    user_id: String,
}

impl SqliteStore {
    pub fn new(database: Database, user_id: impl Into<String>) -> Self {
        Self {
            database,
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    fn deleted(removed: bool, entity: &'static str, id: i64) -> StoreResult<()> {
        if removed {
            Ok(())
        } else {
            Err(StoreError::NotFound { entity, id })
        }
    }
}

#[async_trait]
impl RemoteStore for SqliteStore {
    async fn list_meals(&self, date: NaiveDate) -> StoreResult<Vec<Meal>> {
        let meals = self
            .database
            .with_conn(|conn| Meal::list_for_date(conn, &self.user_id, date))?;
        Ok(meals)
    }

    async fn create_meal(&self, name: &str, date: NaiveDate) -> StoreResult<Meal> {
        let name = validate_required("meal_name", name)?;
        let meal = self
            .database
            .with_conn(|conn| Meal::create(conn, &self.user_id, name, date))?;
        tracing::info!("created meal {} '{}' for {}", meal.id, meal.name, date);
        Ok(meal)
    }

    async fn delete_meal(&self, id: i64) -> StoreResult<()> {
        let removed = self
            .database
            .with_conn(|conn| Meal::delete(conn, &self.user_id, id))?;
        if removed {
            tracing::info!("deleted meal {} and its entries", id);
        }
        Self::deleted(removed, "meal", id)
    }

    async fn add_food_entry(
        &self,
        meal_id: i64,
        food: &FoodItem,
        quantity: f64,
    ) -> StoreResult<FoodEntry> {
        let quantity = validate_quantity(quantity)?;
        let data = FoodEntryCreate::from_food(meal_id, food, quantity);

        let entry = self.database.with_transaction(|tx| {
            if Meal::get_by_id(tx, &self.user_id, meal_id)?.is_none() {
                return Ok(None);
            }
            FoodEntry::create(tx, &self.user_id, &data).map(Some)
        })?;

        let entry = entry.ok_or(StoreError::NotFound {
            entity: "meal",
            id: meal_id,
        })?;
        tracing::debug!(
            "logged {} x {} into meal {} ({} kcal)",
            quantity,
            entry.food_name,
            meal_id,
            entry.calories
        );
        Ok(entry)
    }

    async fn remove_food_entry(&self, id: i64) -> StoreResult<()> {
        let removed = self
            .database
            .with_conn(|conn| FoodEntry::delete(conn, &self.user_id, id))?;
        Self::deleted(removed, "food entry", id)
    }

    async fn list_weight_logs(&self) -> StoreResult<Vec<WeightLog>> {
        let logs = self
            .database
            .with_conn(|conn| WeightLog::list(conn, &self.user_id))?;
        Ok(logs)
    }

    async fn add_weight_log(&self, weight_kg: f64, notes: Option<&str>) -> StoreResult<WeightLog> {
        let weight_kg = validate_positive("weight_kg", weight_kg)?;
        let data = WeightLogCreate {
            weight_kg,
            recorded_at: None,
            notes: notes
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        };
        let log = self
            .database
            .with_conn(|conn| WeightLog::create(conn, &self.user_id, &data))?;
        tracing::info!("logged weight {:.1} kg", log.weight_kg);
        Ok(log)
    }

    async fn delete_weight_log(&self, id: i64) -> StoreResult<()> {
        let removed = self
            .database
            .with_conn(|conn| WeightLog::delete(conn, &self.user_id, id))?;
        Self::deleted(removed, "weight log", id)
    }

    async fn get_goals(&self) -> StoreResult<Option<UserGoals>> {
        let goals = self
            .database
            .with_conn(|conn| UserGoals::get(conn, &self.user_id))?;
        Ok(goals)
    }

    async fn upsert_goals(&self, goals: &UserGoals) -> StoreResult<UserGoals> {
        validate_positive("calories_goal", goals.calories_goal)?;
        validate_positive("protein_goal", goals.protein_goal)?;
        validate_positive("carbs_goal", goals.carbs_goal)?;
        validate_positive("fat_goal", goals.fat_goal)?;

        let saved = self
            .database
            .with_conn(|conn| UserGoals::upsert(conn, &self.user_id, goals))?;
        tracing::info!("saved goals: {} kcal", saved.calories_goal);
        Ok(saved)
    }

    async fn get_profile(&self) -> StoreResult<Option<Profile>> {
        let profile = self
            .database
            .with_conn(|conn| Profile::get(conn, &self.user_id))?;
        Ok(profile)
    }

    async fn upsert_profile(&self, height_cm: f64) -> StoreResult<Profile> {
        let height_cm = validate_positive("height_cm", height_cm)?;
        let profile = self
            .database
            .with_conn(|conn| Profile::upsert_height(conn, &self.user_id, height_cm))?;
        tracing::info!("saved height {} cm", height_cm);
        Ok(profile)
    }

    async fn list_workout_logs(&self) -> StoreResult<Vec<WorkoutLog>> {
        let logs = self
            .database
            .with_conn(|conn| WorkoutLog::list(conn, &self.user_id))?;
        Ok(logs)
    }

    async fn add_workout_log(
        &self,
        entry: &ExerciseEntry,
        muscle_group: MuscleGroup,
        notes: Option<&str>,
    ) -> StoreResult<WorkoutLog> {
        let data = WorkoutLogCreate {
            exercise_name: entry.exercise_name.clone(),
            muscle_group,
            sets: entry.sets.clone(),
            notes: notes.map(str::to_string),
        };
        let log = self
            .database
            .with_conn(|conn| WorkoutLog::create(conn, &self.user_id, &data))?;
        tracing::info!(
            "saved workout log {} ({}, {} sets)",
            log.id,
            log.exercise_name,
            log.sets.len()
        );
        Ok(log)
    }

    async fn delete_workout_log(&self, id: i64) -> StoreResult<()> {
        let removed = self
            .database
            .with_conn(|conn| WorkoutLog::delete(conn, &self.user_id, id))?;
        Self::deleted(removed, "workout log", id)
    }
}
