//! Chart persistence port definition.

use chrono::NaiveDate;

use crate::domain::{AppError, ChartRecord, DailyHoroscope};

/// Port for chart persistence and the daily-horoscope cache.
///
/// Saving is best-effort from the caller's perspective: a failed save never
/// blocks returning the assembled chart.
pub trait ChartStore {
    /// Persist a chart and return its assigned identifier.
    fn save(&self, chart: &ChartRecord, owner: Option<&str>) -> Result<String, AppError>;

    /// Load a chart by identifier.
    fn load(&self, id: &str) -> Result<ChartRecord, AppError>;

    /// List saved charts newest-first, optionally filtered by owner.
    fn list(&self, owner: Option<&str>) -> Result<Vec<ChartRecord>, AppError>;

    /// Cached horoscope for a chart on a given date, if any.
    fn load_horoscope(
        &self,
        chart_id: &str,
        date: NaiveDate,
    ) -> Result<Option<DailyHoroscope>, AppError>;

    /// Cache a generated horoscope.
    fn save_horoscope(&self, horoscope: &DailyHoroscope) -> Result<(), AppError>;
}
