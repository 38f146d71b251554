//! Weight log model
//!
//! Body weight measurements, always stored in kilograms.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};

/// A body weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightLog {
    pub id: i64,
    pub weight_kg: f64,
    pub recorded_at: String,
    pub notes: Option<String>,
    pub created_at: String,
}

/// Data for creating a weight log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightLogCreate {
    pub weight_kg: f64,
    /// Defaults to now
    pub recorded_at: Option<String>,
    pub notes: Option<String>,
}

impl WeightLog {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            weight_kg: row.get("weight_kg")?,
            recorded_at: row.get("recorded_at")?,
            notes: row.get("notes")?,
            created_at: row.get("created_at")?,
        })
    }

    /// Insert a new weight log
    pub fn create(conn: &Connection, user_id: &str, data: &WeightLogCreate) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO weight_logs (user_id, weight_kg, recorded_at, notes)
            VALUES (?1, ?2, COALESCE(?3, datetime('now')), ?4)
            "#,
            params![user_id, data.weight_kg, data.recorded_at, data.notes],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or(DbError::MissingAfterWrite("weight_logs"))
    }

    /// Get a weight log by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM weight_logs WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(log) => Ok(Some(log)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All logs for a user, oldest first
    pub fn list(conn: &Connection, user_id: &str) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM weight_logs WHERE user_id = ?1 ORDER BY recorded_at ASC, id ASC",
        )?;

        let logs = stmt
            .query_map([user_id], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(logs)
    }

    /// Delete a weight log
    pub fn delete(conn: &Connection, user_id: &str, id: i64) -> DbResult<bool> {
        let rows = conn.execute(
            "DELETE FROM weight_logs WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        Ok(rows > 0)
    }
}
