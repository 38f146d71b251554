//! Weight journal
//!
//! Weight history and height, with the stats shown next to the chart.
//! Storage is kilograms; the summary is rendered in whatever unit is asked for.

use std::sync::Arc;

use serde::Serialize;

use crate::engine::{
    bmi_category, latest_bmi, total_weight_change, weight_trend, BmiCategory, TrendDirection,
    WeightUnit, DEFAULT_TREND_WINDOW,
};
use crate::models::validation::validate_positive;
use crate::models::{Profile, WeightLog};
use crate::store::{RemoteStore, StoreResult};

/// Number of most recent logs plotted
pub const CHART_POINTS: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub recorded_at: String,
    pub weight: f64,
}

/// Weight stats in one display unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightSummary {
    pub unit: WeightUnit,
    pub current: Option<f64>,
    pub starting: Option<f64>,
    pub total_change: Option<f64>,
    pub weekly_trend: Option<f64>,
    pub direction: Option<TrendDirection>,
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub entries: usize,
    pub chart: Vec<ChartPoint>,
}

pub struct WeightJournal<S: ?Sized> {
    store: Arc<S>,
    logs: Vec<WeightLog>,
    height_cm: Option<f64>,
}

impl<S: RemoteStore + ?Sized> WeightJournal<S> {
    pub async fn load(store: Arc<S>) -> StoreResult<Self> {
        let mut journal = Self {
            store,
            logs: Vec::new(),
            height_cm: None,
        };
        journal.refresh().await?;
        Ok(journal)
    }

    /// Re-read logs and profile from the store
    pub async fn refresh(&mut self) -> StoreResult<()> {
        let logs = self.store.list_weight_logs().await?;
        let profile = self.store.get_profile().await?;
        self.logs = logs;
        self.height_cm = profile.and_then(|p| p.height_cm);
        Ok(())
    }

    pub fn logs(&self) -> &[WeightLog] {
        &self.logs
    }

    pub fn height_cm(&self) -> Option<f64> {
        self.height_cm
    }

    /// Log a weight entered in `unit`
    pub async fn log(&mut self, value: f64, unit: WeightUnit, notes: Option<&str>) -> StoreResult<WeightLog> {
        let value = validate_positive("weight", value)?;
        let log = self.store.add_weight_log(unit.from_input(value), notes).await?;
        self.refresh().await?;
        Ok(log)
    }

    pub async fn delete(&mut self, id: i64) -> StoreResult<()> {
        self.store.delete_weight_log(id).await?;
        self.refresh().await
    }

    pub async fn save_height(&mut self, height_cm: f64) -> StoreResult<Profile> {
        let profile = self.store.upsert_profile(height_cm).await?;
        self.refresh().await?;
        Ok(profile)
    }

    pub fn summary(&self, unit: WeightUnit) -> WeightSummary {
        let show = |kg: f64| unit.to_display(kg);
        let trend = weight_trend(&self.logs, DEFAULT_TREND_WINDOW);
        let bmi = self.height_cm.and_then(|h| latest_bmi(&self.logs, h));

        let chart_start = self.logs.len().saturating_sub(CHART_POINTS);
        let chart = self.logs[chart_start..]
            .iter()
            .map(|log| ChartPoint {
                recorded_at: log.recorded_at.clone(),
                weight: show(log.weight_kg),
            })
            .collect();

        WeightSummary {
            unit,
            current: self.logs.last().map(|l| show(l.weight_kg)),
            starting: self.logs.first().map(|l| show(l.weight_kg)),
            total_change: total_weight_change(&self.logs).map(show),
            weekly_trend: trend.map(show),
            direction: trend.map(TrendDirection::of),
            bmi,
            bmi_category: bmi.map(bmi_category),
            entries: self.logs.len(),
            chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations::run_migrations, Database};
    use crate::models::ValidationError;
    use crate::store::{SqliteStore, StoreError};

    async fn journal() -> WeightJournal<SqliteStore> {
        let database = Database::in_memory().unwrap();
        database.with_conn(run_migrations).unwrap();
        WeightJournal::load(Arc::new(SqliteStore::new(database, "u1")))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_empty_summary() {
        let journal = journal().await;
        let summary = journal.summary(WeightUnit::Kg);
        assert_eq!(summary.current, None);
        assert_eq!(summary.weekly_trend, None);
        assert_eq!(summary.bmi, None);
        assert!(summary.chart.is_empty());
    }

    #[tokio::test]
    async fn test_pounds_are_stored_as_kg() {
        let mut journal = journal().await;
        journal.log(220.5, WeightUnit::Lbs, None).await.unwrap();

        assert!((journal.logs()[0].weight_kg - 100.0).abs() < 1e-9);
        let summary = journal.summary(WeightUnit::Lbs);
        assert!((summary.current.unwrap() - 220.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_non_positive_weight_rejected() {
        let mut journal = journal().await;
        let err = journal.log(0.0, WeightUnit::Kg, None).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::NotPositive { .. })
        ));
        assert!(journal.logs().is_empty());
    }

    #[tokio::test]
    async fn test_summary_with_height() {
        let mut journal = journal().await;
        for kg in [80.0, 79.0, 78.5] {
            journal.log(kg, WeightUnit::Kg, None).await.unwrap();
        }
        journal.save_height(170.0).await.unwrap();

        let summary = journal.summary(WeightUnit::Kg);
        assert_eq!(summary.entries, 3);
        assert_eq!(summary.starting, Some(80.0));
        assert_eq!(summary.current, Some(78.5));
        assert_eq!(summary.total_change, Some(-1.5));
        assert_eq!(summary.weekly_trend, Some(-1.5));
        assert_eq!(summary.direction, Some(TrendDirection::Down));
        assert_eq!(summary.bmi_category, Some(BmiCategory::Overweight));
        assert_eq!(summary.chart.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_refreshes() {
        let mut journal = journal().await;
        let first = journal.log(70.0, WeightUnit::Kg, Some("fasted")).await.unwrap();
        journal.log(69.5, WeightUnit::Kg, None).await.unwrap();

        journal.delete(first.id).await.unwrap();

        assert_eq!(journal.logs().len(), 1);
        assert_eq!(journal.summary(WeightUnit::Kg).weekly_trend, None);
    }
}
