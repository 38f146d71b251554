//! Body metrics
//!
//! BMI and weight trends over time-ordered weight logs. All weights are
//! kilograms.

use serde::{Deserialize, Serialize};

use crate::models::WeightLog;

/// Number of most recent logs the weekly trend looks at
pub const DEFAULT_TREND_WINDOW: usize = 7;

/// Body Mass Index, `weight / (height in metres)^2`.
///
/// `None` when the height or weight is not a positive number.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !height_cm.is_finite() || height_cm <= 0.0 || !weight_kg.is_finite() || weight_kg <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Classify a BMI. Bands are half-open, so 25.0 is already overweight.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// BMI of the most recent log
pub fn latest_bmi(logs: &[WeightLog], height_cm: f64) -> Option<f64> {
    logs.last().and_then(|log| bmi(log.weight_kg, height_cm))
}

/// Change across the last `window` logs: `last - first`, negative for a loss.
///
/// `None` when fewer than two logs fall in the window.
pub fn weight_trend(logs: &[WeightLog], window: usize) -> Option<f64> {
    let start = logs.len().saturating_sub(window);
    let recent = &logs[start..];
    if recent.len() < 2 {
        return None;
    }
    let first = recent.first()?;
    let last = recent.last()?;
    Some(last.weight_kg - first.weight_kg)
}

/// Change between the earliest and latest log
pub fn total_weight_change(logs: &[WeightLog]) -> Option<f64> {
    weight_trend(logs, logs.len())
}

/// Direction of a weight change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Down,
    Up,
    Flat,
}

impl TrendDirection {
    pub fn of(change: f64) -> Self {
        if change < 0.0 {
            TrendDirection::Down
        } else if change > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Flat
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Down => "Down",
            TrendDirection::Up => "Up",
            TrendDirection::Flat => "No change",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logs(weights: &[f64]) -> Vec<WeightLog> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| WeightLog {
                id: i as i64 + 1,
                weight_kg: *w,
                recorded_at: format!("2025-01-{:02} 08:00:00", i + 1),
                notes: None,
                created_at: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_bmi_formula() {
        let value = bmi(70.0, 175.0).unwrap();
        assert!((value - 22.857142857).abs() < 1e-6);
    }

    #[test]
    fn test_bmi_undefined_without_height() {
        assert_eq!(bmi(70.0, 0.0), None);
        assert_eq!(bmi(70.0, -170.0), None);
        assert_eq!(bmi(0.0, 170.0), None);
        assert_eq!(bmi(70.0, f64::NAN), None);
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(bmi_category(18.49), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::Normal);
        assert_eq!(bmi_category(24.99), BmiCategory::Normal);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.99), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_weight_trend_uses_last_window() {
        let history = logs(&[70.0, 70.5, 69.0, 68.5, 68.8, 68.0, 67.9, 67.5]);
        // last 7 start at 70.5
        let trend = weight_trend(&history, DEFAULT_TREND_WINDOW).unwrap();
        assert!((trend - (67.5 - 70.5)).abs() < 1e-9);
        assert_eq!(TrendDirection::of(trend), TrendDirection::Down);
    }

    #[test]
    fn test_weight_trend_with_short_history() {
        assert_eq!(weight_trend(&[], DEFAULT_TREND_WINDOW), None);
        assert_eq!(weight_trend(&logs(&[70.0]), DEFAULT_TREND_WINDOW), None);
        let two = logs(&[70.0, 71.0]);
        assert_eq!(weight_trend(&two, DEFAULT_TREND_WINDOW), Some(1.0));
        assert_eq!(weight_trend(&two, 1), None);
    }

    #[test]
    fn test_total_change_and_latest_bmi() {
        let history = logs(&[80.0, 78.0, 77.0]);
        assert_eq!(total_weight_change(&history), Some(-3.0));
        let value = latest_bmi(&history, 170.0).unwrap();
        assert!((value - 77.0 / (1.7 * 1.7)).abs() < 1e-9);
        assert_eq!(latest_bmi(&[], 170.0), None);
    }

    #[test]
    fn test_trend_direction() {
        assert_eq!(TrendDirection::of(0.0), TrendDirection::Flat);
        assert_eq!(TrendDirection::of(0.2), TrendDirection::Up);
        assert_eq!(TrendDirection::Flat.label(), "No change");
    }
}
