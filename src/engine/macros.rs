//! Macro totals and goal progress
//!
//! Sums logged food into macro totals and measures them against daily goals.

use serde::{Deserialize, Serialize};

use crate::models::{FoodEntry, FoodLogEntry, Meal, Nutrition, UserGoals};

/// Totals shown on the diet dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
}

impl MacroTotals {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Componentwise comparison with an absolute tolerance
    pub fn approx_eq(&self, other: &MacroTotals, tolerance: f64) -> bool {
        (self.calories - other.calories).abs() <= tolerance
            && (self.protein - other.protein).abs() <= tolerance
            && (self.carbs - other.carbs).abs() <= tolerance
            && (self.fat - other.fat).abs() <= tolerance
            && (self.fiber - other.fiber).abs() <= tolerance
            && (self.sugar - other.sugar).abs() <= tolerance
    }
}

impl From<Nutrition> for MacroTotals {
    fn from(n: Nutrition) -> Self {
        Self {
            calories: n.calories,
            protein: n.protein,
            carbs: n.carbs,
            fat: n.fat,
            fiber: n.fiber,
            sugar: n.sugar,
        }
    }
}

impl From<&FoodEntry> for MacroTotals {
    fn from(e: &FoodEntry) -> Self {
        Self {
            calories: e.calories,
            protein: e.protein,
            carbs: e.carbs,
            fat: e.fat,
            fiber: e.fiber,
            sugar: e.sugar,
        }
    }
}

impl std::ops::Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, other: MacroTotals) -> MacroTotals {
        MacroTotals {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            sugar: self.sugar + other.sugar,
        }
    }
}

impl std::ops::AddAssign for MacroTotals {
    fn add_assign(&mut self, other: MacroTotals) {
        *self = *self + other;
    }
}

impl std::iter::Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroTotals::zero(), |acc, t| acc + t)
    }
}

/// Sum `food.field * servings` over the diet log
pub fn total_macros(entries: &[FoodLogEntry]) -> MacroTotals {
    entries
        .iter()
        .map(|e| MacroTotals::from(e.nutrition()))
        .sum()
}

/// Sum of a meal's stored (already multiplied) entries
pub fn meal_totals(meal: &Meal) -> MacroTotals {
    meal.entries.iter().map(MacroTotals::from).sum()
}

/// Sum across every meal of a day
pub fn daily_totals(meals: &[Meal]) -> MacroTotals {
    meals.iter().map(meal_totals).sum()
}

/// `current / goal`, or `None` when the goal is zero, negative or not a number
pub fn progress_ratio(current: f64, goal: f64) -> Option<f64> {
    if !goal.is_finite() || goal <= 0.0 || !current.is_finite() {
        return None;
    }
    Some(current / goal)
}

/// Width of a progress bar: ratio as a percentage clamped to 0..=100
pub fn progress_percent(current: f64, goal: f64) -> f64 {
    progress_ratio(current, goal)
        .map(|r| (r * 100.0).clamp(0.0, 100.0))
        .unwrap_or(0.0)
}

/// Where a value sits relative to its goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    /// Below half of the goal
    Under,
    /// At least half, below 80%
    OnTrack,
    /// 80% up to and including the goal
    Met,
    /// Over the goal
    Exceeded,
}

/// Classify progress; `None` when the ratio is undefined
pub fn progress_band(current: f64, goal: f64) -> Option<ProgressBand> {
    let ratio = progress_ratio(current, goal)?;
    let band = if ratio < 0.5 {
        ProgressBand::Under
    } else if ratio < 0.8 {
        ProgressBand::OnTrack
    } else if ratio <= 1.0 {
        ProgressBand::Met
    } else {
        ProgressBand::Exceeded
    };
    Some(band)
}

/// Calories still available today, never negative
pub fn remaining_calories(consumed: f64, goal: f64) -> f64 {
    (goal - consumed).max(0.0)
}

/// Progress of one macro against its goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    pub current: f64,
    pub goal: f64,
    pub percent: f64,
    pub band: Option<ProgressBand>,
}

impl MacroProgress {
    pub fn new(current: f64, goal: f64) -> Self {
        Self {
            current,
            goal,
            percent: progress_percent(current, goal),
            band: progress_band(current, goal),
        }
    }
}

/// Progress of every tracked macro against the user's goals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub calories: MacroProgress,
    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fat: MacroProgress,
    pub remaining_calories: f64,
}

impl GoalProgress {
    pub fn compute(totals: &MacroTotals, goals: &UserGoals) -> Self {
        Self {
            calories: MacroProgress::new(totals.calories, goals.calories_goal),
            protein: MacroProgress::new(totals.protein, goals.protein_goal),
            carbs: MacroProgress::new(totals.carbs, goals.carbs_goal),
            fat: MacroProgress::new(totals.fat, goals.fat_goal),
            remaining_calories: remaining_calories(totals.calories, goals.calories_goal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodCategory, FoodItem};

    fn food(name: &str, values: [f64; 7]) -> FoodItem {
        FoodItem {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: FoodCategory::Other,
            serving_size: 100.0,
            serving_unit: "1 serving".to_string(),
            nutrition: Nutrition::from_array(values),
        }
    }

    fn entry(id: u64, food: &FoodItem, servings: f64) -> FoodLogEntry {
        FoodLogEntry::with_servings(id, food.clone(), servings)
    }

    fn food_entry(id: i64, calories: f64, protein: f64) -> FoodEntry {
        FoodEntry {
            id,
            meal_id: 1,
            food_name: "x".to_string(),
            quantity: 1.0,
            unit: None,
            calories,
            protein,
            carbs: 0.0,
            fat: 0.0,
            fiber: 0.0,
            sugar: 0.0,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_total_macros_empty_is_zero() {
        assert_eq!(total_macros(&[]), MacroTotals::zero());
    }

    #[test]
    fn test_total_macros_scales_each_field() {
        let chapati = food("Chapati", [104.0, 3.5, 20.0, 1.2, 2.5, 0.5, 150.0]);
        let dal = food("Dal Tadka", [150.0, 10.0, 22.0, 3.0, 5.0, 2.0, 400.0]);
        let totals = total_macros(&[entry(1, &chapati, 2.0), entry(2, &dal, 1.0)]);

        assert!((totals.calories - 358.0).abs() < 1e-9);
        assert!((totals.protein - 17.0).abs() < 1e-9);
        assert!((totals.carbs - 62.0).abs() < 1e-9);
        assert!((totals.fat - 5.4).abs() < 1e-9);
        assert!((totals.fiber - 10.0).abs() < 1e-9);
        assert!((totals.sugar - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_macros_is_linear() {
        let a_food = food("A", [95.0, 0.5, 25.0, 0.3, 4.4, 19.0, 2.0]);
        let b_food = food("B", [262.0, 8.5, 45.0, 5.0, 2.0, 2.0, 380.0]);
        let a = vec![entry(1, &a_food, 0.5), entry(2, &b_food, 3.0)];
        let b = vec![entry(3, &b_food, 1.5), entry(4, &a_food, 2.0), entry(5, &a_food, 1.0)];

        let joined: Vec<FoodLogEntry> = a.iter().chain(b.iter()).cloned().collect();
        let combined = total_macros(&joined);
        let separate = total_macros(&a) + total_macros(&b);
        assert!(combined.approx_eq(&separate, 1e-9));
    }

    #[test]
    fn test_daily_totals_sum_stored_rows() {
        let meal = |id: i64, entries: Vec<FoodEntry>| Meal {
            id,
            name: format!("Meal {}", id),
            date: chrono::NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(),
            entries,
            created_at: String::new(),
        };
        let meals = vec![
            meal(1, vec![food_entry(1, 208.0, 7.0), food_entry(2, 150.0, 10.0)]),
            meal(2, vec![]),
            meal(3, vec![food_entry(3, 42.0, 1.0)]),
        ];

        assert_eq!(meal_totals(&meals[1]), MacroTotals::zero());
        let totals = daily_totals(&meals);
        assert_eq!(totals.calories, 400.0);
        assert_eq!(totals.protein, 18.0);
    }

    #[test]
    fn test_progress_ratio_guards_zero_goal() {
        assert_eq!(progress_ratio(50.0, 100.0), Some(0.5));
        assert_eq!(progress_ratio(50.0, 0.0), None);
        assert_eq!(progress_ratio(50.0, -10.0), None);
        assert_eq!(progress_ratio(50.0, f64::NAN), None);
        assert_eq!(progress_percent(50.0, 0.0), 0.0);
    }

    #[test]
    fn test_progress_percent_is_clamped() {
        assert_eq!(progress_percent(3000.0, 2000.0), 100.0);
        assert_eq!(progress_percent(500.0, 2000.0), 25.0);
    }

    #[test]
    fn test_progress_band_thresholds() {
        assert_eq!(progress_band(0.0, 100.0), Some(ProgressBand::Under));
        assert_eq!(progress_band(49.9, 100.0), Some(ProgressBand::Under));
        assert_eq!(progress_band(50.0, 100.0), Some(ProgressBand::OnTrack));
        assert_eq!(progress_band(79.9, 100.0), Some(ProgressBand::OnTrack));
        assert_eq!(progress_band(80.0, 100.0), Some(ProgressBand::Met));
        assert_eq!(progress_band(100.0, 100.0), Some(ProgressBand::Met));
        assert_eq!(progress_band(100.1, 100.0), Some(ProgressBand::Exceeded));
        assert_eq!(progress_band(10.0, 0.0), None);
    }

    #[test]
    fn test_remaining_calories_never_negative() {
        assert_eq!(remaining_calories(1500.0, 2000.0), 500.0);
        assert_eq!(remaining_calories(2500.0, 2000.0), 0.0);
    }

    #[test]
    fn test_goal_progress() {
        let totals = MacroTotals {
            calories: 1000.0,
            protein: 150.0,
            carbs: 300.0,
            fat: 20.0,
            ..MacroTotals::zero()
        };
        let progress = GoalProgress::compute(&totals, &UserGoals::default());
        assert_eq!(progress.calories.band, Some(ProgressBand::OnTrack));
        assert_eq!(progress.protein.band, Some(ProgressBand::Met));
        assert_eq!(progress.carbs.band, Some(ProgressBand::Exceeded));
        assert_eq!(progress.fat.band, Some(ProgressBand::Under));
        assert_eq!(progress.remaining_calories, 1000.0);
    }
}
