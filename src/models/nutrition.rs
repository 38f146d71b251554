//! Shared nutrition data structure
//!
//! Per-serving values carried by every food item.

use serde::{Deserialize, Serialize};

/// Nutritional information for one serving
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
    pub fiber: f64,   // grams
    pub sugar: f64,   // grams
    pub sodium: f64,  // milligrams
}

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from the column order used by the reference tables:
    /// calories, protein, carbs, fat, fiber, sugar, sodium
    pub const fn from_array(values: [f64; 7]) -> Self {
        Self {
            calories: values[0],
            protein: values[1],
            carbs: values[2],
            fat: values[3],
            fiber: values[4],
            sugar: values[5],
            sodium: values[6],
        }
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
            fiber: self.fiber * multiplier,
            sugar: self.sugar * multiplier,
            sodium: self.sodium * multiplier,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            sugar: self.sugar + other.sugar,
            sodium: self.sodium + other.sodium,
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_multiplies_every_field() {
        let n = Nutrition::from_array([100.0, 4.0, 20.0, 2.0, 1.0, 0.5, 150.0]);
        let scaled = n * 1.5;
        assert_eq!(scaled.calories, 150.0);
        assert_eq!(scaled.protein, 6.0);
        assert_eq!(scaled.sodium, 225.0);
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Nutrition = Vec::<Nutrition>::new().into_iter().sum();
        assert_eq!(total, Nutrition::zero());
    }
}
