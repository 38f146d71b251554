//! Diet log
//!
//! Reference foods picked for today with a serving multiplier each. Nothing
//! here is persisted.

use crate::engine::{total_macros, GoalProgress, MacroTotals};
use crate::models::validation::{validate_servings, SERVING_STEP};
use crate::models::{FoodItem, FoodLogEntry, UserGoals, ValidationError};

#[derive(Debug, Clone)]
pub struct FoodLog {
    entries: Vec<FoodLogEntry>,
    next_id: u64,
}

impl Default for FoodLog {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn entries(&self) -> &[FoodLogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Log one serving of a food; returns the entry id
    pub fn add(&mut self, food: FoodItem) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!("added {} to diet log", food.name);
        self.entries.push(FoodLogEntry::new(id, food));
        id
    }

    fn entry_mut(&mut self, id: u64) -> Result<&mut FoodLogEntry, ValidationError> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ValidationError::UnknownEntry {
                entity: "food log entry",
                id,
            })
    }

    /// Set the multiplier. Invalid values leave the entry unchanged.
    pub fn set_servings(&mut self, id: u64, servings: f64) -> Result<f64, ValidationError> {
        let entry = self.entry_mut(id)?;
        entry.servings = validate_servings(servings)?;
        Ok(entry.servings)
    }

    pub fn increment(&mut self, id: u64) -> Result<f64, ValidationError> {
        let current = self.entry_mut(id)?.servings;
        self.set_servings(id, current + SERVING_STEP)
    }

    /// Step down by half a serving; rejected at the minimum
    pub fn decrement(&mut self, id: u64) -> Result<f64, ValidationError> {
        let current = self.entry_mut(id)?.servings;
        self.set_servings(id, current - SERVING_STEP)
    }

    pub fn remove(&mut self, id: u64) -> Result<FoodLogEntry, ValidationError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(ValidationError::UnknownEntry {
                entity: "food log entry",
                id,
            })?;
        Ok(self.entries.remove(index))
    }

    pub fn totals(&self) -> MacroTotals {
        total_macros(&self.entries)
    }

    pub fn progress(&self, goals: &UserGoals) -> GoalProgress {
        GoalProgress::compute(&self.totals(), goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ProgressBand;
    use crate::reference::find_food;

    #[test]
    fn test_chapati_and_dal_scenario() {
        let mut log = FoodLog::new();
        let chapati = log.add(find_food("1").unwrap().clone());
        log.add(find_food("14").unwrap().clone());

        log.increment(chapati).unwrap();
        let totals = log.totals();
        assert!((totals.calories - 358.0).abs() < 1e-9);
        assert!((totals.protein - 17.0).abs() < 1e-9);

        log.set_servings(chapati, 0.5).unwrap();
        let err = log.decrement(chapati).unwrap_err();
        assert!(matches!(err, ValidationError::ServingsBelowMinimum { .. }));
        assert_eq!(log.entries()[0].servings, 0.5);
    }

    #[test]
    fn test_new_entries_start_at_one_serving() {
        let mut log = FoodLog::default();
        let id = log.add(find_food("3").unwrap().clone());
        assert_eq!(log.entries()[0].id, id);
        assert_eq!(log.entries()[0].servings, 1.0);
    }

    #[test]
    fn test_off_step_servings_rejected() {
        let mut log = FoodLog::new();
        let id = log.add(find_food("1").unwrap().clone());
        assert!(matches!(
            log.set_servings(id, 1.3),
            Err(ValidationError::ServingsOffStep { .. })
        ));
        assert_eq!(log.set_servings(id, 2.5), Ok(2.5));
        assert_eq!(log.decrement(id), Ok(2.0));
    }

    #[test]
    fn test_remove_and_unknown_ids() {
        let mut log = FoodLog::new();
        let id = log.add(find_food("1").unwrap().clone());
        assert!(log.increment(id + 10).is_err());

        let removed = log.remove(id).unwrap();
        assert_eq!(removed.food.name, "Chapati (Whole Wheat)");
        assert!(log.is_empty());
        assert_eq!(log.totals(), MacroTotals::zero());
        assert!(log.remove(id).is_err());
    }

    #[test]
    fn test_progress_against_default_goals() {
        let mut log = FoodLog::new();
        let id = log.add(find_food("1").unwrap().clone());
        log.set_servings(id, 10.0).unwrap();

        let progress = log.progress(&UserGoals::default());
        assert_eq!(progress.calories.band, Some(ProgressBand::OnTrack));
        assert!((progress.remaining_calories - 960.0).abs() < 1e-9);
    }
}
