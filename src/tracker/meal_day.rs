//! Meals of one day
//!
//! Every write goes to the store first and is followed by a fresh read, so
//! the meals held here are always what the store has.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::ai::DetectedFood;
use crate::engine::{daily_totals, meal_totals, GoalProgress, MacroTotals};
use crate::models::{FoodEntry, FoodItem, Meal, UserGoals};
use crate::store::{RemoteStore, StoreResult};

/// Day totals measured against the user's goals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub meal_count: usize,
    pub entry_count: usize,
    pub totals: MacroTotals,
    pub progress: GoalProgress,
}

/// One meal with its totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealSummary {
    pub id: i64,
    pub name: String,
    pub entry_count: usize,
    pub totals: MacroTotals,
}

pub struct MealDay<S: ?Sized> {
    store: Arc<S>,
    date: NaiveDate,
    meals: Vec<Meal>,
}

impl<S: RemoteStore + ?Sized> MealDay<S> {
    pub async fn load(store: Arc<S>, date: NaiveDate) -> StoreResult<Self> {
        let meals = store.list_meals(date).await?;
        Ok(Self { store, date, meals })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub async fn refresh(&mut self) -> StoreResult<()> {
        self.meals = self.store.list_meals(self.date).await?;
        Ok(())
    }

    /// Switch to another day. The current day stays loaded if the fetch fails.
    pub async fn navigate(&mut self, date: NaiveDate) -> StoreResult<()> {
        let meals = self.store.list_meals(date).await?;
        self.date = date;
        self.meals = meals;
        Ok(())
    }

    /// Create the next numbered meal, "Meal N"
    pub async fn add_meal(&mut self) -> StoreResult<Meal> {
        let name = format!("Meal {}", self.meals.len() + 1);
        self.add_named_meal(&name).await
    }

    pub async fn add_named_meal(&mut self, name: &str) -> StoreResult<Meal> {
        let meal = self.store.create_meal(name, self.date).await?;
        self.refresh().await?;
        Ok(meal)
    }

    pub async fn delete_meal(&mut self, meal_id: i64) -> StoreResult<()> {
        self.store.delete_meal(meal_id).await?;
        self.refresh().await
    }

    pub async fn add_food(&mut self, meal_id: i64, food: &FoodItem, quantity: f64) -> StoreResult<FoodEntry> {
        let entry = self.store.add_food_entry(meal_id, food, quantity).await?;
        self.refresh().await?;
        Ok(entry)
    }

    /// Add a photo-recognized food as one serving
    pub async fn add_scanned_food(&mut self, meal_id: i64, detected: DetectedFood) -> StoreResult<FoodEntry> {
        let food = detected.into_food_item();
        self.add_food(meal_id, &food, 1.0).await
    }

    pub async fn remove_food(&mut self, entry_id: i64) -> StoreResult<()> {
        self.store.remove_food_entry(entry_id).await?;
        self.refresh().await
    }

    /// Stored goals, or the defaults when none were saved
    pub async fn goals(&self) -> StoreResult<UserGoals> {
        Ok(self.store.get_goals().await?.unwrap_or_default())
    }

    pub fn totals(&self) -> MacroTotals {
        daily_totals(&self.meals)
    }

    pub fn meal_summaries(&self) -> Vec<MealSummary> {
        self.meals
            .iter()
            .map(|m| MealSummary {
                id: m.id,
                name: m.name.clone(),
                entry_count: m.entries.len(),
                totals: meal_totals(m),
            })
            .collect()
    }

    pub fn summary(&self, goals: &UserGoals) -> DaySummary {
        let totals = self.totals();
        DaySummary {
            date: self.date,
            meal_count: self.meals.len(),
            entry_count: self.meals.iter().map(|m| m.entries.len()).sum(),
            totals,
            progress: GoalProgress::compute(&totals, goals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations::run_migrations, Database};
    use crate::reference::find_food;
    use crate::store::{SqliteStore, StoreError};

    fn store() -> Arc<SqliteStore> {
        let database = Database::in_memory().unwrap();
        database.with_conn(run_migrations).unwrap();
        Arc::new(SqliteStore::new(database, "u1"))
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[tokio::test]
    async fn test_meals_are_numbered() {
        let mut meals = MealDay::load(store(), day(9)).await.unwrap();
        assert!(meals.meals().is_empty());

        meals.add_meal().await.unwrap();
        let second = meals.add_meal().await.unwrap();

        assert_eq!(second.name, "Meal 2");
        let names: Vec<&str> = meals.meals().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Meal 1", "Meal 2"]);
    }

    #[tokio::test]
    async fn test_writes_are_visible_after_refetch() {
        let mut meals = MealDay::load(store(), day(9)).await.unwrap();
        let meal = meals.add_meal().await.unwrap();

        meals.add_food(meal.id, find_food("1").unwrap(), 2.0).await.unwrap();
        let dal = meals.add_food(meal.id, find_food("14").unwrap(), 1.0).await.unwrap();

        assert_eq!(meals.meals()[0].entries.len(), 2);
        assert!((meals.totals().calories - 358.0).abs() < 1e-9);
        assert!((meals.totals().protein - 17.0).abs() < 1e-9);

        meals.remove_food(dal.id).await.unwrap();
        assert!((meals.totals().calories - 208.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_delete_meal_drops_its_entries() {
        let mut meals = MealDay::load(store(), day(9)).await.unwrap();
        let meal = meals.add_meal().await.unwrap();
        meals.add_food(meal.id, find_food("3").unwrap(), 1.0).await.unwrap();

        meals.delete_meal(meal.id).await.unwrap();

        assert!(meals.meals().is_empty());
        assert_eq!(meals.totals(), MacroTotals::zero());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_state() {
        let mut meals = MealDay::load(store(), day(9)).await.unwrap();
        let meal = meals.add_meal().await.unwrap();
        let before = meals.meals().to_vec();

        let err = meals
            .add_food(meal.id, find_food("1").unwrap(), 0.0)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(meals.meals(), before.as_slice());
    }

    #[tokio::test]
    async fn test_scanned_food_and_summary() {
        let mut meals = MealDay::load(store(), day(9)).await.unwrap();
        let meal = meals.add_meal().await.unwrap();
        let detected = DetectedFood {
            name: "Masala Dosa".to_string(),
            calories: 387.0,
            protein: 8.0,
            carbs: 52.0,
            fat: 16.0,
        };

        let entry = meals.add_scanned_food(meal.id, detected).await.unwrap();
        assert_eq!(entry.unit.as_deref(), Some("serving"));

        let goals = meals.goals().await.unwrap();
        let summary = meals.summary(&goals);
        assert_eq!(summary.meal_count, 1);
        assert_eq!(summary.entry_count, 1);
        assert_eq!(summary.progress.remaining_calories, 1613.0);
        assert_eq!(meals.meal_summaries()[0].totals.fat, 16.0);
    }

    #[tokio::test]
    async fn test_navigate_between_days() {
        let store = store();
        let mut meals = MealDay::load(store.clone(), day(9)).await.unwrap();
        meals.add_meal().await.unwrap();

        meals.navigate(day(10)).await.unwrap();
        assert_eq!(meals.date(), day(10));
        assert!(meals.meals().is_empty());

        meals.navigate(day(9)).await.unwrap();
        assert_eq!(meals.meals().len(), 1);
    }
}
