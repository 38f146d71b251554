//! Reference data
//!
//! Static food and exercise tables with lookup helpers. Filters are passed in
//! as parameters; nothing here holds state.

mod exercises;
mod foods;

pub use exercises::{exercise_table, exercises_by_muscle_group, find_exercise, muscle_groups};
pub use foods::{find_food, food_categories, food_table, search_foods, CategoryFilter};
