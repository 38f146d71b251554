//! Aggregation engine
//!
//! Pure computations over already-fetched records: macro totals and goal
//! progress, body metrics, workout volume and weight unit conversion.

mod body;
mod macros;
mod units;
mod volume;

pub use body::{
    bmi, bmi_category, latest_bmi, total_weight_change, weight_trend, BmiCategory,
    TrendDirection, DEFAULT_TREND_WINDOW,
};
pub use macros::{
    daily_totals, meal_totals, progress_band, progress_percent, progress_ratio,
    remaining_calories, total_macros, GoalProgress, MacroProgress, MacroTotals, ProgressBand,
};
pub use units::{WeightUnit, LBS_PER_KG};
pub use volume::{session_progress, session_volume, SessionProgress};
