//! Meal and food entry models
//!
//! A meal is a named container for one calendar day; food entries store the
//! consumed macros already multiplied by quantity.

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};
use super::{FoodItem, Nutrition};

/// A meal with its food entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub entries: Vec<FoodEntry>,
    pub created_at: String,
}

/// A persisted food entry row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: i64,
    pub meal_id: i64,
    pub food_name: String,
    pub quantity: f64,
    pub unit: Option<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub created_at: String,
}

/// Data for creating a food entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntryCreate {
    pub meal_id: i64,
    pub food_name: String,
    pub quantity: f64,
    pub unit: Option<String>,
    /// Already scaled by `quantity`
    pub nutrition: Nutrition,
}

impl FoodEntryCreate {
    /// Scale a food's per-serving values by `quantity`
    pub fn from_food(meal_id: i64, food: &FoodItem, quantity: f64) -> Self {
        Self {
            meal_id,
            food_name: food.name.clone(),
            quantity,
            unit: Some(food.serving_unit.clone()),
            nutrition: food.nutrition_for(quantity),
        }
    }
}

impl Meal {
    /// Create from a database row (entries are loaded separately)
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("meal_name")?,
            date: row.get("meal_date")?,
            entries: Vec::new(),
            created_at: row.get("created_at")?,
        })
    }

    /// Insert a new, empty meal
    pub fn create(conn: &Connection, user_id: &str, name: &str, date: NaiveDate) -> DbResult<Self> {
        conn.execute(
            "INSERT INTO meals (user_id, meal_name, meal_date) VALUES (?1, ?2, ?3)",
            params![user_id, name, date],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, user_id, id)?.ok_or(DbError::MissingAfterWrite("meals"))
    }

    /// Get a meal (with entries) by ID
    pub fn get_by_id(conn: &Connection, user_id: &str, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM meals WHERE id = ?1 AND user_id = ?2")?;

        let result = stmt.query_row(params![id, user_id], Self::from_row);
        match result {
            Ok(mut meal) => {
                meal.entries = FoodEntry::list_for_meal(conn, meal.id)?;
                Ok(Some(meal))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All meals for a day in creation order, each with its entries
    pub fn list_for_date(conn: &Connection, user_id: &str, date: NaiveDate) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM meals WHERE user_id = ?1 AND meal_date = ?2 ORDER BY id",
        )?;

        let mut meals = stmt
            .query_map(params![user_id, date], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        for meal in &mut meals {
            meal.entries = FoodEntry::list_for_meal(conn, meal.id)?;
        }

        Ok(meals)
    }

    /// Delete a meal. Its food entries go with it via ON DELETE CASCADE.
    pub fn delete(conn: &Connection, user_id: &str, id: i64) -> DbResult<bool> {
        let rows = conn.execute(
            "DELETE FROM meals WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        Ok(rows > 0)
    }
}

impl FoodEntry {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            meal_id: row.get("meal_id")?,
            food_name: row.get("food_name")?,
            quantity: row.get("quantity")?,
            unit: row.get("unit")?,
            calories: row.get("calories")?,
            protein: row.get("protein")?,
            carbs: row.get("carbs")?,
            fat: row.get("fat")?,
            fiber: row.get("fiber")?,
            sugar: row.get("sugar")?,
            created_at: row.get("created_at")?,
        })
    }

    /// Insert a food entry
    pub fn create(conn: &Connection, user_id: &str, data: &FoodEntryCreate) -> DbResult<Self> {
        let n = &data.nutrition;
        conn.execute(
            r#"
            INSERT INTO food_entries (
                user_id, meal_id, food_name, quantity, unit,
                calories, protein, carbs, fat, fiber, sugar
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
            params![
                user_id,
                data.meal_id,
                data.food_name,
                data.quantity,
                data.unit,
                n.calories,
                n.protein,
                n.carbs,
                n.fat,
                n.fiber,
                n.sugar,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or(DbError::MissingAfterWrite("food_entries"))
    }

    /// Get a food entry by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM food_entries WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Entries of one meal in insertion order
    pub fn list_for_meal(conn: &Connection, meal_id: i64) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM food_entries WHERE meal_id = ?1 ORDER BY id")?;

        let entries = stmt
            .query_map([meal_id], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Delete a food entry
    pub fn delete(conn: &Connection, user_id: &str, id: i64) -> DbResult<bool> {
        let rows = conn.execute(
            "DELETE FROM food_entries WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        Ok(rows > 0)
    }
}
