//! User goals model
//!
//! Daily macro targets. One row per user, written with upsert semantics.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};

/// Daily macro targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserGoals {
    pub calories_goal: f64,
    pub protein_goal: f64,
    pub carbs_goal: f64,
    pub fat_goal: f64,
}

impl Default for UserGoals {
    fn default() -> Self {
        Self {
            calories_goal: 2000.0,
            protein_goal: 150.0,
            carbs_goal: 250.0,
            fat_goal: 65.0,
        }
    }
}

impl UserGoals {
    /// Columns are nullable; a missing goal falls back to the default target
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            calories_goal: row
                .get::<_, Option<f64>>("calories_goal")?
                .unwrap_or(defaults.calories_goal),
            protein_goal: row
                .get::<_, Option<f64>>("protein_goal")?
                .unwrap_or(defaults.protein_goal),
            carbs_goal: row
                .get::<_, Option<f64>>("carbs_goal")?
                .unwrap_or(defaults.carbs_goal),
            fat_goal: row
                .get::<_, Option<f64>>("fat_goal")?
                .unwrap_or(defaults.fat_goal),
        })
    }

    /// Get the user's goals, if any were ever saved
    pub fn get(conn: &Connection, user_id: &str) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM user_goals WHERE user_id = ?1")?;

        let result = stmt.query_row([user_id], Self::from_row);
        match result {
            Ok(goals) => Ok(Some(goals)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Insert or replace the user's goals
    pub fn upsert(conn: &Connection, user_id: &str, goals: &UserGoals) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO user_goals (user_id, calories_goal, protein_goal, carbs_goal, fat_goal)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(user_id) DO UPDATE SET
                calories_goal = excluded.calories_goal,
                protein_goal = excluded.protein_goal,
                carbs_goal = excluded.carbs_goal,
                fat_goal = excluded.fat_goal,
                updated_at = datetime('now')
            "#,
            params![
                user_id,
                goals.calories_goal,
                goals.protein_goal,
                goals.carbs_goal,
                goals.fat_goal,
            ],
        )?;

        Self::get(conn, user_id)?.ok_or(DbError::MissingAfterWrite("user_goals"))
    }
}
