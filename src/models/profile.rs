//! Profile model
//!
//! Per-user profile. The height feeds BMI; the display name is optional.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};

/// A user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub display_name: Option<String>,
    pub height_cm: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

impl Profile {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            user_id: row.get("user_id")?,
            display_name: row.get("display_name")?,
            height_cm: row.get("height_cm")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Get the user's profile
    pub fn get(conn: &Connection, user_id: &str) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM profiles WHERE user_id = ?1")?;

        let result = stmt.query_row([user_id], Self::from_row);
        match result {
            Ok(profile) => Ok(Some(profile)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set the height, creating the profile if needed
    pub fn upsert_height(conn: &Connection, user_id: &str, height_cm: f64) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO profiles (user_id, height_cm) VALUES (?1, ?2)
            ON CONFLICT(user_id) DO UPDATE SET
                height_cm = excluded.height_cm,
                updated_at = datetime('now')
            "#,
            params![user_id, height_cm],
        )?;

        Self::get(conn, user_id)?.ok_or(DbError::MissingAfterWrite("profiles"))
    }
}
