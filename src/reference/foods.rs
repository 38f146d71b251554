//! Food reference table
//!
//! Common Indian foods with nutrition per reference serving, plus search.

use std::sync::OnceLock;

use crate::models::{FoodCategory, FoodItem, Nutrition};

/// Category filter for food search. `All` disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(FoodCategory),
}

impl CategoryFilter {
    /// `"all"` (any case) means no filter; anything else must be an exact
    /// category label.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        FoodCategory::from_str(s).map(CategoryFilter::Only)
    }

    pub fn matches(&self, category: FoodCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

fn food(
    id: &str,
    name: &str,
    category: FoodCategory,
    serving_size: f64,
    serving_unit: &str,
    values: [f64; 7],
) -> FoodItem {
    FoodItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        serving_size,
        serving_unit: serving_unit.to_string(),
        nutrition: Nutrition::from_array(values),
    }
}

/// The full table, in source order
pub fn food_table() -> &'static [FoodItem] {
    static TABLE: OnceLock<Vec<FoodItem>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

/// Browsable categories in display order
pub fn food_categories() -> &'static [FoodCategory] {
    &FoodCategory::BROWSABLE
}

/// Case-insensitive substring search on the name, optionally restricted to
/// one category. The query is used as typed, whitespace included. Results keep
/// table order; an empty query matches everything.
pub fn search_foods(query: &str, category: CategoryFilter) -> Vec<&'static FoodItem> {
    let needle = query.to_lowercase();
    food_table()
        .iter()
        .filter(|f| category.matches(f.category))
        .filter(|f| f.name.to_lowercase().contains(&needle))
        .collect()
}

pub fn find_food(id: &str) -> Option<&'static FoodItem> {
    food_table().iter().find(|f| f.id == id)
}

fn build_table() -> Vec<FoodItem> {
    vec![
        food(
            "1",
            "Chapati (Whole Wheat)",
            FoodCategory::Breads,
            40.0,
            "1 piece",
            [104.0, 3.5, 20.0, 1.2, 2.5, 0.5, 150.0],
        ),
        food(
            "2",
            "Paratha (Plain)",
            FoodCategory::Breads,
            60.0,
            "1 piece",
            [180.0, 4.0, 25.0, 7.0, 2.0, 0.5, 200.0],
        ),
        food(
            "3",
            "Naan",
            FoodCategory::Breads,
            90.0,
            "1 piece",
            [262.0, 8.5, 45.0, 5.0, 2.0, 2.0, 380.0],
        ),
        food(
            "4",
            "Puri",
            FoodCategory::Breads,
            25.0,
            "1 piece",
            [100.0, 2.0, 12.0, 5.0, 0.5, 0.3, 80.0],
        ),
        food(
            "5",
            "Bhatura",
            FoodCategory::Breads,
            60.0,
            "1 piece",
            [200.0, 4.0, 28.0, 8.0, 1.0, 1.0, 150.0],
        ),
        food(
            "6",
            "Steamed Rice (White)",
            FoodCategory::RiceDishes,
            150.0,
            "1 cup",
            [206.0, 4.3, 45.0, 0.4, 0.6, 0.1, 2.0],
        ),
        food(
            "7",
            "Brown Rice",
            FoodCategory::RiceDishes,
            150.0,
            "1 cup",
            [216.0, 5.0, 45.0, 1.8, 3.5, 0.7, 10.0],
        ),
        food(
            "8",
            "Jeera Rice",
            FoodCategory::RiceDishes,
            180.0,
            "1 cup",
            [230.0, 4.5, 42.0, 5.0, 1.0, 0.5, 280.0],
        ),
        food(
            "9",
            "Vegetable Pulao",
            FoodCategory::RiceDishes,
            200.0,
            "1 cup",
            [260.0, 5.0, 45.0, 6.0, 2.5, 2.0, 350.0],
        ),
        food(
            "10",
            "Chicken Biryani",
            FoodCategory::RiceDishes,
            250.0,
            "1 cup",
            [350.0, 18.0, 45.0, 12.0, 2.0, 1.5, 550.0],
        ),
        food(
            "11",
            "Mutton Biryani",
            FoodCategory::RiceDishes,
            250.0,
            "1 cup",
            [400.0, 22.0, 42.0, 16.0, 2.0, 1.5, 580.0],
        ),
        food(
            "12",
            "Lemon Rice",
            FoodCategory::RiceDishes,
            180.0,
            "1 cup",
            [220.0, 4.0, 40.0, 5.0, 1.5, 1.0, 300.0],
        ),
        food(
            "13",
            "Curd Rice",
            FoodCategory::RiceDishes,
            200.0,
            "1 cup",
            [230.0, 6.0, 38.0, 6.0, 0.5, 3.0, 200.0],
        ),
        food(
            "14",
            "Dal Tadka (Toor)",
            FoodCategory::PulsesAndLegumes,
            150.0,
            "1 cup",
            [150.0, 10.0, 22.0, 3.0, 5.0, 2.0, 400.0],
        ),
        food(
            "15",
            "Chana Dal",
            FoodCategory::PulsesAndLegumes,
            150.0,
            "1 cup",
            [170.0, 11.0, 25.0, 3.5, 6.0, 2.5, 380.0],
        ),
        food(
            "16",
            "Moong Dal",
            FoodCategory::PulsesAndLegumes,
            150.0,
            "1 cup",
            [140.0, 12.0, 20.0, 1.5, 4.0, 2.0, 350.0],
        ),
        food(
            "17",
            "Rajma (Kidney Beans)",
            FoodCategory::PulsesAndLegumes,
            180.0,
            "1 cup",
            [210.0, 14.0, 35.0, 2.0, 11.0, 3.0, 450.0],
        ),
        food(
            "18",
            "Chole (Chickpeas)",
            FoodCategory::PulsesAndLegumes,
            180.0,
            "1 cup",
            [240.0, 12.0, 38.0, 5.0, 10.0, 4.0, 480.0],
        ),
        food(
            "19",
            "Sambar",
            FoodCategory::PulsesAndLegumes,
            200.0,
            "1 cup",
            [130.0, 8.0, 20.0, 3.0, 4.0, 3.0, 520.0],
        ),
        food(
            "20",
            "Dal Makhani",
            FoodCategory::PulsesAndLegumes,
            180.0,
            "1 cup",
            [280.0, 11.0, 30.0, 12.0, 6.0, 3.0, 500.0],
        ),
        food(
            "21",
            "Aloo Gobi",
            FoodCategory::Vegetables,
            150.0,
            "1 cup",
            [140.0, 3.0, 20.0, 6.0, 3.0, 3.0, 350.0],
        ),
        food(
            "22",
            "Palak Paneer",
            FoodCategory::Vegetables,
            180.0,
            "1 cup",
            [260.0, 12.0, 12.0, 18.0, 4.0, 3.0, 450.0],
        ),
        food(
            "23",
            "Bhindi Masala",
            FoodCategory::Vegetables,
            150.0,
            "1 cup",
            [120.0, 3.0, 15.0, 6.0, 4.0, 2.0, 300.0],
        ),
        food(
            "24",
            "Baingan Bharta",
            FoodCategory::Vegetables,
            180.0,
            "1 cup",
            [150.0, 4.0, 18.0, 7.0, 5.0, 4.0, 400.0],
        ),
        food(
            "25",
            "Matar Paneer",
            FoodCategory::Vegetables,
            180.0,
            "1 cup",
            [280.0, 14.0, 15.0, 18.0, 3.0, 4.0, 420.0],
        ),
        food(
            "26",
            "Aloo Paratha",
            FoodCategory::Breads,
            100.0,
            "1 piece",
            [260.0, 5.0, 35.0, 11.0, 2.0, 1.0, 320.0],
        ),
        food(
            "27",
            "Mixed Vegetable Curry",
            FoodCategory::Vegetables,
            180.0,
            "1 cup",
            [160.0, 4.0, 22.0, 6.0, 5.0, 5.0, 380.0],
        ),
        food(
            "28",
            "Lauki (Bottle Gourd)",
            FoodCategory::Vegetables,
            150.0,
            "1 cup",
            [80.0, 2.0, 12.0, 3.0, 2.0, 3.0, 250.0],
        ),
        food(
            "29",
            "Paneer (Cottage Cheese)",
            FoodCategory::Dairy,
            100.0,
            "100g",
            [265.0, 18.0, 3.0, 21.0, 0.0, 2.0, 20.0],
        ),
        food(
            "30",
            "Dahi (Curd/Yogurt)",
            FoodCategory::Dairy,
            150.0,
            "1 cup",
            [100.0, 5.0, 8.0, 5.0, 0.0, 6.0, 60.0],
        ),
        food(
            "31",
            "Lassi (Sweet)",
            FoodCategory::Beverages,
            250.0,
            "1 glass",
            [180.0, 6.0, 30.0, 4.0, 0.0, 25.0, 80.0],
        ),
        food(
            "32",
            "Lassi (Salted)",
            FoodCategory::Beverages,
            250.0,
            "1 glass",
            [110.0, 6.0, 10.0, 4.0, 0.0, 6.0, 400.0],
        ),
        food(
            "33",
            "Chaas (Buttermilk)",
            FoodCategory::Beverages,
            250.0,
            "1 glass",
            [60.0, 4.0, 8.0, 1.0, 0.0, 6.0, 350.0],
        ),
        food(
            "34",
            "Kheer (Rice Pudding)",
            FoodCategory::SnacksAndSweets,
            150.0,
            "1 bowl",
            [250.0, 6.0, 40.0, 8.0, 0.5, 28.0, 100.0],
        ),
        food(
            "35",
            "Butter Chicken",
            FoodCategory::MeatAndPoultry,
            200.0,
            "1 cup",
            [340.0, 25.0, 12.0, 22.0, 2.0, 5.0, 650.0],
        ),
        food(
            "36",
            "Chicken Tikka Masala",
            FoodCategory::MeatAndPoultry,
            200.0,
            "1 cup",
            [300.0, 28.0, 10.0, 16.0, 2.0, 4.0, 600.0],
        ),
        food(
            "37",
            "Tandoori Chicken",
            FoodCategory::MeatAndPoultry,
            150.0,
            "1 piece",
            [220.0, 30.0, 4.0, 10.0, 0.5, 1.0, 480.0],
        ),
        food(
            "38",
            "Mutton Curry",
            FoodCategory::MeatAndPoultry,
            200.0,
            "1 cup",
            [320.0, 26.0, 8.0, 22.0, 1.0, 2.0, 550.0],
        ),
        food(
            "39",
            "Keema (Minced Meat)",
            FoodCategory::MeatAndPoultry,
            180.0,
            "1 cup",
            [280.0, 22.0, 10.0, 18.0, 2.0, 3.0, 500.0],
        ),
        food(
            "40",
            "Chicken Curry",
            FoodCategory::MeatAndPoultry,
            200.0,
            "1 cup",
            [280.0, 26.0, 10.0, 15.0, 2.0, 3.0, 520.0],
        ),
        food(
            "41",
            "Egg Curry",
            FoodCategory::MeatAndPoultry,
            200.0,
            "2 eggs",
            [250.0, 14.0, 10.0, 18.0, 2.0, 3.0, 450.0],
        ),
        food(
            "42",
            "Fish Curry",
            FoodCategory::Seafood,
            180.0,
            "1 cup",
            [220.0, 24.0, 8.0, 11.0, 1.0, 2.0, 480.0],
        ),
        food(
            "43",
            "Prawn Masala",
            FoodCategory::Seafood,
            180.0,
            "1 cup",
            [200.0, 22.0, 8.0, 9.0, 1.5, 2.0, 520.0],
        ),
        food(
            "44",
            "Fish Fry",
            FoodCategory::Seafood,
            120.0,
            "1 piece",
            [250.0, 20.0, 12.0, 14.0, 0.5, 1.0, 400.0],
        ),
        food(
            "45",
            "Samosa",
            FoodCategory::SnacksAndSweets,
            60.0,
            "1 piece",
            [180.0, 3.0, 22.0, 9.0, 1.5, 1.0, 280.0],
        ),
        food(
            "46",
            "Pakora (Mixed)",
            FoodCategory::SnacksAndSweets,
            50.0,
            "4 pieces",
            [150.0, 3.0, 15.0, 9.0, 1.0, 1.0, 250.0],
        ),
        food(
            "47",
            "Vada Pav",
            FoodCategory::SnacksAndSweets,
            150.0,
            "1 piece",
            [290.0, 6.0, 40.0, 12.0, 3.0, 3.0, 450.0],
        ),
        food(
            "48",
            "Pav Bhaji",
            FoodCategory::SnacksAndSweets,
            300.0,
            "1 plate",
            [400.0, 10.0, 55.0, 16.0, 6.0, 8.0, 680.0],
        ),
        food(
            "49",
            "Dosa (Plain)",
            FoodCategory::SnacksAndSweets,
            80.0,
            "1 piece",
            [130.0, 3.0, 25.0, 2.0, 1.0, 0.5, 180.0],
        ),
        food(
            "50",
            "Masala Dosa",
            FoodCategory::SnacksAndSweets,
            180.0,
            "1 piece",
            [250.0, 5.0, 40.0, 8.0, 3.0, 2.0, 350.0],
        ),
        food(
            "51",
            "Idli",
            FoodCategory::SnacksAndSweets,
            40.0,
            "1 piece",
            [40.0, 1.5, 8.0, 0.2, 0.5, 0.3, 100.0],
        ),
        food(
            "52",
            "Medu Vada",
            FoodCategory::SnacksAndSweets,
            50.0,
            "1 piece",
            [140.0, 5.0, 15.0, 7.0, 2.0, 0.5, 200.0],
        ),
        food(
            "53",
            "Upma",
            FoodCategory::SnacksAndSweets,
            200.0,
            "1 cup",
            [220.0, 5.0, 35.0, 7.0, 3.0, 1.0, 400.0],
        ),
        food(
            "54",
            "Poha",
            FoodCategory::SnacksAndSweets,
            200.0,
            "1 cup",
            [200.0, 4.0, 38.0, 5.0, 2.0, 2.0, 350.0],
        ),
        food(
            "55",
            "Gulab Jamun",
            FoodCategory::SnacksAndSweets,
            45.0,
            "1 piece",
            [150.0, 2.0, 25.0, 5.0, 0.2, 20.0, 30.0],
        ),
        food(
            "56",
            "Rasgulla",
            FoodCategory::SnacksAndSweets,
            50.0,
            "1 piece",
            [120.0, 3.0, 22.0, 2.0, 0.0, 18.0, 20.0],
        ),
        food(
            "57",
            "Jalebi",
            FoodCategory::SnacksAndSweets,
            40.0,
            "2 pieces",
            [180.0, 1.0, 35.0, 5.0, 0.0, 28.0, 15.0],
        ),
        food(
            "58",
            "Ladoo (Besan)",
            FoodCategory::SnacksAndSweets,
            40.0,
            "1 piece",
            [180.0, 3.0, 20.0, 10.0, 1.0, 12.0, 20.0],
        ),
        food(
            "59",
            "Barfi",
            FoodCategory::SnacksAndSweets,
            40.0,
            "1 piece",
            [160.0, 3.0, 22.0, 7.0, 0.5, 15.0, 25.0],
        ),
        food(
            "60",
            "Masala Chai",
            FoodCategory::Beverages,
            150.0,
            "1 cup",
            [60.0, 2.0, 10.0, 2.0, 0.0, 8.0, 30.0],
        ),
        food(
            "61",
            "Filter Coffee",
            FoodCategory::Beverages,
            150.0,
            "1 cup",
            [70.0, 2.0, 10.0, 2.5, 0.0, 8.0, 25.0],
        ),
        food(
            "62",
            "Mango Lassi",
            FoodCategory::Beverages,
            250.0,
            "1 glass",
            [220.0, 6.0, 40.0, 4.0, 1.0, 32.0, 80.0],
        ),
        food(
            "63",
            "Nimbu Pani (Lemonade)",
            FoodCategory::Beverages,
            250.0,
            "1 glass",
            [80.0, 0.5, 20.0, 0.0, 0.0, 18.0, 400.0],
        ),
        food(
            "64",
            "Coconut Water",
            FoodCategory::Beverages,
            240.0,
            "1 glass",
            [45.0, 2.0, 9.0, 0.5, 2.5, 6.0, 250.0],
        ),
        food(
            "65",
            "Mango",
            FoodCategory::Fruits,
            150.0,
            "1 cup",
            [100.0, 1.5, 25.0, 0.5, 2.5, 22.0, 2.0],
        ),
        food(
            "66",
            "Banana",
            FoodCategory::Fruits,
            120.0,
            "1 medium",
            [105.0, 1.3, 27.0, 0.4, 3.0, 14.0, 1.0],
        ),
        food(
            "67",
            "Papaya",
            FoodCategory::Fruits,
            150.0,
            "1 cup",
            [60.0, 1.0, 15.0, 0.2, 2.5, 11.0, 10.0],
        ),
        food(
            "68",
            "Guava",
            FoodCategory::Fruits,
            150.0,
            "1 medium",
            [70.0, 2.5, 15.0, 1.0, 9.0, 9.0, 3.0],
        ),
        food(
            "69",
            "Apple",
            FoodCategory::Fruits,
            180.0,
            "1 medium",
            [95.0, 0.5, 25.0, 0.3, 4.0, 19.0, 2.0],
        ),
        food(
            "70",
            "Pomegranate",
            FoodCategory::Fruits,
            150.0,
            "1 cup",
            [120.0, 2.5, 28.0, 1.5, 6.0, 20.0, 5.0],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let table = food_table();
        assert_eq!(table.len(), 70);
        assert!(table.iter().all(|f| f.category != FoodCategory::Other));
        assert!(table.iter().all(|f| f.nutrition.calories >= 0.0));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = food_table().iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), food_table().len());
    }

    #[test]
    fn test_search_dal_in_pulses_keeps_table_order() {
        let results = search_foods("dal", CategoryFilter::Only(FoodCategory::PulsesAndLegumes));
        let names: Vec<&str> = results.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Dal Tadka (Toor)", "Chana Dal", "Moong Dal", "Dal Makhani"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let upper = search_foods("DAL", CategoryFilter::All);
        let lower = search_foods("dal", CategoryFilter::All);
        assert_eq!(upper, lower);
        assert!(upper.len() >= 4);
    }

    #[test]
    fn test_search_keeps_query_whitespace() {
        let names: Vec<&str> = search_foods(" dal", CategoryFilter::All)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert!(names.contains(&"Chana Dal"));
        assert!(names.contains(&"Moong Dal"));
        assert!(!names.contains(&"Dal Tadka (Toor)"));
        assert!(!names.contains(&"Dal Makhani"));
        assert!(search_foods(" ", CategoryFilter::All).len() < 70);
    }

    #[test]
    fn test_category_only_filter() {
        let pulses = search_foods("", CategoryFilter::Only(FoodCategory::PulsesAndLegumes));
        assert_eq!(pulses.len(), 7);
        assert_eq!(search_foods("", CategoryFilter::All).len(), 70);
        assert!(search_foods("pizza", CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse("All"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("Breads"),
            Some(CategoryFilter::Only(FoodCategory::Breads))
        );
        assert_eq!(CategoryFilter::parse("breads"), None);
    }

    #[test]
    fn test_find_food() {
        let chapati = find_food("1").unwrap();
        assert_eq!(chapati.nutrition.calories, 104.0);
        assert_eq!(chapati.nutrition.protein, 3.5);
        assert!(find_food("999").is_none());
        assert_eq!(food_categories().len(), 12);
    }
}
