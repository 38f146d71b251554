//! Trackers
//!
//! Sequencing of store calls and engine computations for the diet log, the
//! meal calendar and the weight journal.

mod food_log;
mod meal_day;
mod weight_journal;

pub use food_log::FoodLog;
pub use meal_day::{DaySummary, MealDay, MealSummary};
pub use weight_journal::{ChartPoint, WeightJournal, WeightSummary, CHART_POINTS};
