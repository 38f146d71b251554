//! Food log entry model
//!
//! A reference food logged with a serving multiplier, held in memory until
//! the user discards it.

use serde::{Deserialize, Serialize};

use super::{FoodItem, Nutrition};

/// One food on the diet log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    pub id: u64,
    pub food: FoodItem,
    pub servings: f64,
}

impl FoodLogEntry {
    /// New entries always start at one serving
    pub fn new(id: u64, food: FoodItem) -> Self {
        Self {
            id,
            food,
            servings: 1.0,
        }
    }

    pub fn with_servings(id: u64, food: FoodItem, servings: f64) -> Self {
        Self { id, food, servings }
    }

    /// `food.macro * servings` for every field
    pub fn nutrition(&self) -> Nutrition {
        self.food.nutrition_for(self.servings)
    }
}
