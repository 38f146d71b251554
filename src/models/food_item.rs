//! Food Item model
//!
//! A food with nutritional information per reference serving.

use serde::{Deserialize, Serialize};

use super::Nutrition;

/// Food category used by the reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    CerealsAndGrains,
    PulsesAndLegumes,
    Vegetables,
    Fruits,
    Dairy,
    MeatAndPoultry,
    Seafood,
    SnacksAndSweets,
    Beverages,
    PreparedDishes,
    Breads,
    RiceDishes,
    /// Foods that did not come from the reference table (e.g. scanned)
    Other,
}

impl FoodCategory {
    /// Categories offered for browsing, in display order
    pub const BROWSABLE: [FoodCategory; 12] = [
        FoodCategory::CerealsAndGrains,
        FoodCategory::PulsesAndLegumes,
        FoodCategory::Vegetables,
        FoodCategory::Fruits,
        FoodCategory::Dairy,
        FoodCategory::MeatAndPoultry,
        FoodCategory::Seafood,
        FoodCategory::SnacksAndSweets,
        FoodCategory::Beverages,
        FoodCategory::PreparedDishes,
        FoodCategory::Breads,
        FoodCategory::RiceDishes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::CerealsAndGrains => "Cereals & Grains",
            FoodCategory::PulsesAndLegumes => "Pulses & Legumes",
            FoodCategory::Vegetables => "Vegetables",
            FoodCategory::Fruits => "Fruits",
            FoodCategory::Dairy => "Dairy",
            FoodCategory::MeatAndPoultry => "Meat & Poultry",
            FoodCategory::Seafood => "Seafood",
            FoodCategory::SnacksAndSweets => "Snacks & Sweets",
            FoodCategory::Beverages => "Beverages",
            FoodCategory::PreparedDishes => "Prepared Dishes",
            FoodCategory::Breads => "Breads",
            FoodCategory::RiceDishes => "Rice Dishes",
            FoodCategory::Other => "Other",
        }
    }

    /// Parse a display label. Matching is exact, as category filters are.
    pub fn from_str(s: &str) -> Option<Self> {
        if s == FoodCategory::Other.as_str() {
            return Some(FoodCategory::Other);
        }
        Self::BROWSABLE.into_iter().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A food item with nutritional information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub category: FoodCategory,
    /// Reference serving weight in grams
    pub serving_size: f64,
    /// Display label for one serving, e.g. "1 piece"
    pub serving_unit: String,
    pub nutrition: Nutrition,
}

impl FoodItem {
    /// Nutrition for `servings` reference servings
    pub fn nutrition_for(&self, servings: f64) -> Nutrition {
        self.nutrition.scale(servings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for category in FoodCategory::BROWSABLE {
            assert_eq!(FoodCategory::from_str(category.as_str()), Some(category));
        }
        assert_eq!(FoodCategory::from_str("Other"), Some(FoodCategory::Other));
    }

    #[test]
    fn test_category_match_is_exact() {
        assert_eq!(FoodCategory::from_str("pulses & legumes"), None);
        assert_eq!(FoodCategory::from_str("all"), None);
    }
}
