//! Filesystem-based chart store implementation.
//!
//! One JSON file per chart under `<root>/charts/`, cached horoscopes under
//! `<root>/horoscopes/`. Identifiers are assigned at save time.

use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};

use crate::domain::{AppError, ChartRecord, DailyHoroscope};
use crate::ports::ChartStore;

/// Chart store rooted at a directory, typically `.natal/`.
#[derive(Debug, Clone)]
pub struct FilesystemChartStore {
    root: PathBuf,
}

impl FilesystemChartStore {
    /// Create a store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn charts_dir(&self) -> PathBuf {
        self.root.join("charts")
    }

    fn horoscopes_dir(&self) -> PathBuf {
        self.root.join("horoscopes")
    }

    fn chart_path(&self, id: &str) -> PathBuf {
        self.charts_dir().join(format!("{}.json", id))
    }

    fn horoscope_path(&self, chart_id: &str, date: NaiveDate) -> PathBuf {
        self.horoscopes_dir().join(format!("{}_{}.json", chart_id, date.format("%Y-%m-%d")))
    }

    fn next_id(&self) -> String {
        let millis = Utc::now().timestamp_millis();
        let mut id = format!("chart-{}", millis);
        let mut n = 1;
        while self.chart_path(&id).exists() {
            id = format!("chart-{}-{}", millis, n);
            n += 1;
        }
        id
    }
}

impl ChartStore for FilesystemChartStore {
    fn save(&self, chart: &ChartRecord, owner: Option<&str>) -> Result<String, AppError> {
        fs::create_dir_all(self.charts_dir())?;

        let id = self.next_id();
        let mut record = chart.clone();
        record.id = Some(id.clone());
        record.owner = owner.map(str::to_string);

        let content = serde_json::to_string_pretty(&record)?;
        fs::write(self.chart_path(&id), content)?;

        Ok(id)
    }

    fn load(&self, id: &str) -> Result<ChartRecord, AppError> {
        // Identifiers never contain path separators.
        if id.contains(['/', '\\']) {
            return Err(AppError::ChartNotFound(id.to_string()));
        }

        let path = self.chart_path(id);
        if !path.exists() {
            return Err(AppError::ChartNotFound(id.to_string()));
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn list(&self, owner: Option<&str>) -> Result<Vec<ChartRecord>, AppError> {
        let dir = self.charts_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut charts = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let content = fs::read_to_string(&path)?;
            let chart: ChartRecord = serde_json::from_str(&content)?;
            if let Some(owner) = owner
                && chart.owner.as_deref() != Some(owner)
            {
                continue;
            }
            charts.push(chart);
        }

        charts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(charts)
    }

    fn load_horoscope(
        &self,
        chart_id: &str,
        date: NaiveDate,
    ) -> Result<Option<DailyHoroscope>, AppError> {
        let path = self.horoscope_path(chart_id, date);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save_horoscope(&self, horoscope: &DailyHoroscope) -> Result<(), AppError> {
        fs::create_dir_all(self.horoscopes_dir())?;

        let path = self.horoscope_path(&horoscope.chart_id, horoscope.date);
        let content = serde_json::to_string_pretty(horoscope)?;
        fs::write(path, content)?;

        Ok(())
    }
}
