//! Workout models
//!
//! Sets and logged exercises of a training session, and the persisted
//! workout log rows built from them.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};
use super::{Exercise, MuscleGroup};

/// One set of an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub id: u64,
    pub weight: f64,
    pub reps: u32,
    pub completed: bool,
}

impl WorkoutSet {
    pub fn empty(id: u64) -> Self {
        Self {
            id,
            weight: 0.0,
            reps: 0,
            completed: false,
        }
    }
}

/// An exercise logged within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub id: u64,
    pub exercise_id: String,
    pub exercise_name: String,
    pub muscle_group: MuscleGroup,
    pub image_url: String,
    pub sets: Vec<WorkoutSet>,
}

impl ExerciseEntry {
    /// Start an entry with a single empty set
    pub fn start(id: u64, first_set_id: u64, exercise: &Exercise) -> Self {
        Self {
            id,
            exercise_id: exercise.id.clone(),
            exercise_name: exercise.name.clone(),
            muscle_group: exercise.muscle_group,
            image_url: exercise.image_url.clone(),
            sets: vec![WorkoutSet::empty(first_set_id)],
        }
    }

    pub fn completed_sets(&self) -> usize {
        self.sets.iter().filter(|s| s.completed).count()
    }
}

/// A persisted workout log row (weights in kilograms)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub id: i64,
    pub exercise_name: String,
    pub muscle_group: MuscleGroup,
    pub sets: Vec<WorkoutSet>,
    pub notes: Option<String>,
    pub recorded_at: String,
    pub created_at: String,
}

/// Data for creating a workout log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLogCreate {
    pub exercise_name: String,
    pub muscle_group: MuscleGroup,
    pub sets: Vec<WorkoutSet>,
    pub notes: Option<String>,
}

/// Intermediate row; `sets` is decoded after the query
struct WorkoutLogRow {
    id: i64,
    exercise_name: String,
    muscle_group: String,
    sets: String,
    notes: Option<String>,
    recorded_at: String,
    created_at: String,
}

impl WorkoutLogRow {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            exercise_name: row.get("exercise_name")?,
            muscle_group: row.get("muscle_group")?,
            sets: row.get("sets")?,
            notes: row.get("notes")?,
            recorded_at: row.get("recorded_at")?,
            created_at: row.get("created_at")?,
        })
    }

    fn decode(self) -> DbResult<WorkoutLog> {
        // The CHECK constraint keeps unknown groups out of the table
        let muscle_group = MuscleGroup::from_str(&self.muscle_group).ok_or_else(|| {
            DbError::Sqlite(rusqlite::Error::InvalidColumnType(
                0,
                "muscle_group".to_string(),
                rusqlite::types::Type::Text,
            ))
        })?;

        Ok(WorkoutLog {
            id: self.id,
            exercise_name: self.exercise_name,
            muscle_group,
            sets: serde_json::from_str(&self.sets)?,
            notes: self.notes,
            recorded_at: self.recorded_at,
            created_at: self.created_at,
        })
    }
}

impl WorkoutLog {
    /// Insert a workout log
    pub fn create(conn: &Connection, user_id: &str, data: &WorkoutLogCreate) -> DbResult<Self> {
        let sets = serde_json::to_string(&data.sets)?;
        conn.execute(
            r#"
            INSERT INTO workout_logs (user_id, exercise_name, muscle_group, sets, notes)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                user_id,
                data.exercise_name,
                data.muscle_group.as_str(),
                sets,
                data.notes,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or(DbError::MissingAfterWrite("workout_logs"))
    }

    /// Get a workout log by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM workout_logs WHERE id = ?1")?;

        let result = stmt.query_row([id], WorkoutLogRow::from_row);
        match result {
            Ok(row) => Ok(Some(row.decode()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All workout logs for a user, newest first
    pub fn list(conn: &Connection, user_id: &str) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM workout_logs WHERE user_id = ?1 ORDER BY recorded_at DESC, id DESC",
        )?;

        let rows = stmt
            .query_map([user_id], WorkoutLogRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(WorkoutLogRow::decode).collect()
    }

    /// Delete a workout log
    pub fn delete(conn: &Connection, user_id: &str, id: i64) -> DbResult<bool> {
        let rows = conn.execute(
            "DELETE FROM workout_logs WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        Ok(rows > 0)
    }
}
