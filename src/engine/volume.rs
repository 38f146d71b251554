//! Workout volume and session progress

use serde::{Deserialize, Serialize};

use crate::models::ExerciseEntry;

/// Sum of `weight * reps` over completed sets. Incomplete sets count as zero.
pub fn session_volume(entry: &ExerciseEntry) -> f64 {
    entry
        .sets
        .iter()
        .filter(|s| s.completed)
        .map(|s| s.weight * f64::from(s.reps))
        .sum()
}

/// Completed vs. total sets across a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProgress {
    pub completed_sets: usize,
    pub total_sets: usize,
}

impl SessionProgress {
    /// 0 when the session has no sets
    pub fn percent(&self) -> f64 {
        if self.total_sets == 0 {
            return 0.0;
        }
        self.completed_sets as f64 / self.total_sets as f64 * 100.0
    }
}

pub fn session_progress(entries: &[ExerciseEntry]) -> SessionProgress {
    entries
        .iter()
        .fold(SessionProgress::default(), |acc, entry| SessionProgress {
            completed_sets: acc.completed_sets + entry.completed_sets(),
            total_sets: acc.total_sets + entry.sets.len(),
        })
}
