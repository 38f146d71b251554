//! Workout session
//!
//! The exercises and sets of the workout in progress. Set weights are held in
//! the session's display unit and converted to kilograms when the session is
//! saved.

use crate::engine::{session_progress, session_volume, SessionProgress, WeightUnit};
use crate::models::validation::validate_non_negative;
use crate::models::{Exercise, ExerciseEntry, ValidationError, WorkoutLog, WorkoutSet};
use crate::store::{RemoteStore, StoreResult};

/// In-memory workout session
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    entries: Vec<ExerciseEntry>,
    unit: WeightUnit,
    next_id: u64,
}

impl Default for WorkoutSession {
    fn default() -> Self {
        Self::new(WeightUnit::default())
    }
}

impl WorkoutSession {
    pub fn new(unit: WeightUnit) -> Self {
        Self {
            entries: Vec::new(),
            unit,
            next_id: 1,
        }
    }

    pub fn entries(&self) -> &[ExerciseEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Switch the display unit. Entered numbers are kept as they are.
    pub fn set_unit(&mut self, unit: WeightUnit) {
        self.unit = unit;
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn entry_mut(&mut self, entry_id: u64) -> Result<&mut ExerciseEntry, ValidationError> {
        self.entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or(ValidationError::UnknownEntry {
                entity: "exercise entry",
                id: entry_id,
            })
    }

    fn set_mut(&mut self, entry_id: u64, set_id: u64) -> Result<&mut WorkoutSet, ValidationError> {
        self.entry_mut(entry_id)?
            .sets
            .iter_mut()
            .find(|s| s.id == set_id)
            .ok_or(ValidationError::UnknownEntry {
                entity: "set",
                id: set_id,
            })
    }

    /// Add an exercise with one empty set; returns the new entry's id
    pub fn add_exercise(&mut self, exercise: &Exercise) -> u64 {
        let id = self.allocate_id();
        let set_id = self.allocate_id();
        self.entries.push(ExerciseEntry::start(id, set_id, exercise));
        tracing::debug!("added {} to session", exercise.name);
        id
    }

    /// Append a set pre-filled from the previous one, not completed
    pub fn add_set(&mut self, entry_id: u64) -> Result<u64, ValidationError> {
        self.entry_mut(entry_id)?;
        let set_id = self.allocate_id();
        let entry = self.entry_mut(entry_id)?;
        let (weight, reps) = entry
            .sets
            .last()
            .map(|s| (s.weight, s.reps))
            .unwrap_or((0.0, 0));
        entry.sets.push(WorkoutSet {
            id: set_id,
            weight,
            reps,
            completed: false,
        });
        Ok(set_id)
    }

    pub fn update_set_weight(&mut self, entry_id: u64, set_id: u64, weight: f64) -> Result<(), ValidationError> {
        let weight = validate_non_negative("weight", weight)?;
        self.set_mut(entry_id, set_id)?.weight = weight;
        Ok(())
    }

    pub fn update_set_reps(&mut self, entry_id: u64, set_id: u64, reps: u32) -> Result<(), ValidationError> {
        self.set_mut(entry_id, set_id)?.reps = reps;
        Ok(())
    }

    /// Flip a set's completion; returns the new state
    pub fn toggle_set_complete(&mut self, entry_id: u64, set_id: u64) -> Result<bool, ValidationError> {
        let set = self.set_mut(entry_id, set_id)?;
        set.completed = !set.completed;
        Ok(set.completed)
    }

    /// Remove a set. The last remaining set of an entry stays; returns
    /// whether anything was removed.
    pub fn remove_set(&mut self, entry_id: u64, set_id: u64) -> Result<bool, ValidationError> {
        let entry = self.entry_mut(entry_id)?;
        let index = entry
            .sets
            .iter()
            .position(|s| s.id == set_id)
            .ok_or(ValidationError::UnknownEntry {
                entity: "set",
                id: set_id,
            })?;
        if entry.sets.len() <= 1 {
            return Ok(false);
        }
        entry.sets.remove(index);
        Ok(true)
    }

    pub fn remove_exercise(&mut self, entry_id: u64) -> Result<ExerciseEntry, ValidationError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or(ValidationError::UnknownEntry {
                entity: "exercise entry",
                id: entry_id,
            })?;
        Ok(self.entries.remove(index))
    }

    pub fn progress(&self) -> SessionProgress {
        session_progress(&self.entries)
    }

    /// Volume of one entry, in the display unit
    pub fn volume(&self, entry_id: u64) -> Result<f64, ValidationError> {
        self.entries
            .iter()
            .find(|e| e.id == entry_id)
            .map(session_volume)
            .ok_or(ValidationError::UnknownEntry {
                entity: "exercise entry",
                id: entry_id,
            })
    }

    /// Volume across the whole session, in the display unit
    pub fn total_volume(&self) -> f64 {
        self.entries.iter().map(session_volume).sum()
    }

    /// Save every entry that has completed sets, then clear the session.
    ///
    /// Only completed sets are stored, with weights converted to kilograms.
    /// Each entry leaves the session as soon as it is saved, so after a store
    /// error the session holds only what is still unsaved and calling
    /// `finish` again stores nothing twice.
    pub async fn finish<S>(&mut self, store: &S, notes: Option<&str>) -> StoreResult<Vec<WorkoutLog>>
    where
        S: RemoteStore + ?Sized,
    {
        let mut saved = Vec::new();
        let mut index = 0;
        while index < self.entries.len() {
            let entry = &self.entries[index];
            if entry.completed_sets() == 0 {
                index += 1;
                continue;
            }
            let stored = ExerciseEntry {
                sets: entry
                    .sets
                    .iter()
                    .filter(|s| s.completed)
                    .map(|s| WorkoutSet {
                        weight: self.unit.from_input(s.weight),
                        ..s.clone()
                    })
                    .collect(),
                ..entry.clone()
            };
            match store.add_workout_log(&stored, stored.muscle_group, notes).await {
                Ok(log) => {
                    self.entries.remove(index);
                    saved.push(log);
                }
                Err(err) => {
                    tracing::warn!(
                        "workout save stopped after {} exercises: {}",
                        saved.len(),
                        err
                    );
                    return Err(err);
                }
            }
        }

        tracing::info!("finished workout: {} exercises saved", saved.len());
        self.entries.clear();
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations::run_migrations, Database};
    use crate::reference::find_exercise;
    use crate::store::{SqliteStore, StoreError};

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::db::DbError;
    use crate::models::{FoodEntry, FoodItem, Meal, MuscleGroup, Profile, UserGoals, WeightLog};

    fn session_with_bench() -> (WorkoutSession, u64) {
        let mut session = WorkoutSession::new(WeightUnit::Kg);
        let id = session.add_exercise(find_exercise("c1").unwrap());
        (session, id)
    }

    fn first_set(session: &WorkoutSession, entry_id: u64) -> u64 {
        session
            .entries()
            .iter()
            .find(|e| e.id == entry_id)
            .unwrap()
            .sets[0]
            .id
    }

    #[test]
    fn test_new_exercise_has_one_empty_set() {
        let (session, id) = session_with_bench();
        let entry = &session.entries()[0];
        assert_eq!(entry.id, id);
        assert_eq!(entry.exercise_name, "Barbell Bench Press");
        assert_eq!(entry.sets.len(), 1);
        assert_eq!(entry.sets[0], WorkoutSet::empty(entry.sets[0].id));
    }

    #[test]
    fn test_add_set_copies_previous_set() {
        let (mut session, id) = session_with_bench();
        let set = first_set(&session, id);
        session.update_set_weight(id, set, 40.0).unwrap();
        session.update_set_reps(id, set, 10).unwrap();
        session.toggle_set_complete(id, set).unwrap();

        let new_set = session.add_set(id).unwrap();
        let sets = &session.entries()[0].sets;
        assert_eq!(
            sets[1],
            WorkoutSet {
                id: new_set,
                weight: 40.0,
                reps: 10,
                completed: false
            }
        );
        assert_ne!(new_set, set);
    }

    #[test]
    fn test_volume_and_progress() {
        let (mut session, id) = session_with_bench();
        let set = first_set(&session, id);
        session.update_set_weight(id, set, 40.0).unwrap();
        session.update_set_reps(id, set, 10).unwrap();
        session.add_set(id).unwrap();
        session.toggle_set_complete(id, set).unwrap();

        assert_eq!(session.volume(id).unwrap(), 400.0);
        assert_eq!(session.total_volume(), 400.0);
        assert_eq!(session.progress().completed_sets, 1);
        assert_eq!(session.progress().total_sets, 2);
        assert_eq!(session.progress().percent(), 50.0);
    }

    #[test]
    fn test_last_set_is_never_removed() {
        let (mut session, id) = session_with_bench();
        let set = first_set(&session, id);
        assert_eq!(session.remove_set(id, set), Ok(false));

        let second = session.add_set(id).unwrap();
        assert_eq!(session.remove_set(id, set), Ok(true));
        assert_eq!(session.entries()[0].sets.len(), 1);
        assert_eq!(session.entries()[0].sets[0].id, second);
    }

    #[test]
    fn test_unknown_ids_and_bad_weight_are_rejected() {
        let (mut session, id) = session_with_bench();
        let set = first_set(&session, id);

        assert!(matches!(
            session.add_set(999),
            Err(ValidationError::UnknownEntry { id: 999, .. })
        ));
        assert!(session.toggle_set_complete(id, 999).is_err());
        assert!(matches!(
            session.update_set_weight(id, set, -5.0),
            Err(ValidationError::Negative { .. })
        ));
        assert_eq!(session.entries()[0].sets[0].weight, 0.0);

        session.remove_exercise(id).unwrap();
        assert!(session.is_empty());
        assert!(session.remove_exercise(id).is_err());
    }

    #[tokio::test]
    async fn test_finish_saves_completed_sets_in_kg() {
        let database = Database::in_memory().unwrap();
        database.with_conn(run_migrations).unwrap();
        let store = SqliteStore::new(database, "u1");

        let mut session = WorkoutSession::new(WeightUnit::Lbs);
        let bench = session.add_exercise(find_exercise("c1").unwrap());
        let set = first_set(&session, bench);
        session.update_set_weight(bench, set, 220.5).unwrap();
        session.update_set_reps(bench, set, 5).unwrap();
        session.toggle_set_complete(bench, set).unwrap();
        session.add_set(bench).unwrap();
        // untouched exercise, nothing completed
        session.add_exercise(find_exercise("b1").unwrap());

        let saved = session.finish(&store, None).await.unwrap();

        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].sets.len(), 1);
        assert!((saved[0].sets[0].weight - 100.0).abs() < 1e-9);
        assert!(session.is_empty());
        assert_eq!(store.list_workout_logs().await.unwrap().len(), 1);
    }

    /// SQLite store whose workout saves fail from the `fail_from`-th call on
    struct FlakyStore {
        inner: SqliteStore,
        fail_from: AtomicUsize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RemoteStore for FlakyStore {
        async fn list_meals(&self, date: NaiveDate) -> StoreResult<Vec<Meal>> {
            self.inner.list_meals(date).await
        }

        async fn create_meal(&self, name: &str, date: NaiveDate) -> StoreResult<Meal> {
            self.inner.create_meal(name, date).await
        }

        async fn delete_meal(&self, id: i64) -> StoreResult<()> {
            self.inner.delete_meal(id).await
        }

        async fn add_food_entry(&self, meal_id: i64, food: &FoodItem, quantity: f64)
            -> StoreResult<FoodEntry> {
            self.inner.add_food_entry(meal_id, food, quantity).await
        }

        async fn remove_food_entry(&self, id: i64) -> StoreResult<()> {
            self.inner.remove_food_entry(id).await
        }

        async fn list_weight_logs(&self) -> StoreResult<Vec<WeightLog>> {
            self.inner.list_weight_logs().await
        }

        async fn add_weight_log(&self, weight_kg: f64, notes: Option<&str>) -> StoreResult<WeightLog> {
            self.inner.add_weight_log(weight_kg, notes).await
        }

        async fn delete_weight_log(&self, id: i64) -> StoreResult<()> {
            self.inner.delete_weight_log(id).await
        }

        async fn get_goals(&self) -> StoreResult<Option<UserGoals>> {
            self.inner.get_goals().await
        }

        async fn upsert_goals(&self, goals: &UserGoals) -> StoreResult<UserGoals> {
            self.inner.upsert_goals(goals).await
        }

        async fn get_profile(&self) -> StoreResult<Option<Profile>> {
            self.inner.get_profile().await
        }

        async fn upsert_profile(&self, height_cm: f64) -> StoreResult<Profile> {
            self.inner.upsert_profile(height_cm).await
        }

        async fn list_workout_logs(&self) -> StoreResult<Vec<WorkoutLog>> {
            self.inner.list_workout_logs().await
        }

        async fn add_workout_log(
            &self,
            entry: &ExerciseEntry,
            muscle_group: MuscleGroup,
            notes: Option<&str>,
        ) -> StoreResult<WorkoutLog> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call >= self.fail_from.load(Ordering::SeqCst) {
                return Err(StoreError::Database(DbError::MissingAfterWrite("workout_logs")));
            }
            self.inner.add_workout_log(entry, muscle_group, notes).await
        }

        async fn delete_workout_log(&self, id: i64) -> StoreResult<()> {
            self.inner.delete_workout_log(id).await
        }
    }

    fn complete_first_set(session: &mut WorkoutSession, entry_id: u64, weight: f64) {
        let set = first_set(session, entry_id);
        session.update_set_weight(entry_id, set, weight).unwrap();
        session.update_set_reps(entry_id, set, 5).unwrap();
        session.toggle_set_complete(entry_id, set).unwrap();
    }

    #[tokio::test]
    async fn test_retry_after_failed_finish_saves_each_exercise_once() {
        let database = Database::in_memory().unwrap();
        database.with_conn(run_migrations).unwrap();
        let store = FlakyStore {
            inner: SqliteStore::new(database, "u1"),
            fail_from: AtomicUsize::new(2),
            calls: AtomicUsize::new(0),
        };

        let mut session = WorkoutSession::new(WeightUnit::Kg);
        let bench = session.add_exercise(find_exercise("c1").unwrap());
        complete_first_set(&mut session, bench, 100.0);
        let deadlift = session.add_exercise(find_exercise("b1").unwrap());
        complete_first_set(&mut session, deadlift, 140.0);

        assert!(session.finish(&store, None).await.is_err());
        assert_eq!(store.list_workout_logs().await.unwrap().len(), 1);
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.entries()[0].exercise_name, "Deadlift");

        store.fail_from.store(usize::MAX, Ordering::SeqCst);
        let saved = session.finish(&store, None).await.unwrap();
        assert_eq!(saved.len(), 1);
        assert!(session.is_empty());

        let mut names: Vec<String> = store
            .list_workout_logs()
            .await
            .unwrap()
            .into_iter()
            .map(|log| log.exercise_name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Barbell Bench Press", "Deadlift"]);
    }
}
