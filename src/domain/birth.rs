//! Validated birth input.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Validated input for chart generation.
///
/// Coordinates are optional; when absent the rising-sign formula treats the
/// birth place as (0, 0). Construct through [`BirthInput::new`] or
/// [`BirthInput::parse`] so the field invariants hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub time_of_birth: NaiveTime,
    pub place_of_birth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl BirthInput {
    /// Validate and build a birth input from already-typed fields.
    pub fn new(
        name: &str,
        date_of_birth: NaiveDate,
        time_of_birth: NaiveTime,
        place_of_birth: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }

        let place_of_birth = place_of_birth.trim();
        if place_of_birth.is_empty() {
            return Err(AppError::EmptyPlace);
        }

        if let Some(lat) = latitude
            && !(-90.0..=90.0).contains(&lat)
        {
            return Err(AppError::CoordinateOutOfRange {
                axis: "Latitude",
                value: lat,
                min: -90.0,
                max: 90.0,
            });
        }

        if let Some(lon) = longitude
            && !(-180.0..=180.0).contains(&lon)
        {
            return Err(AppError::CoordinateOutOfRange {
                axis: "Longitude",
                value: lon,
                min: -180.0,
                max: 180.0,
            });
        }

        Ok(Self {
            name: name.to_string(),
            date_of_birth,
            time_of_birth,
            place_of_birth: place_of_birth.to_string(),
            latitude,
            longitude,
        })
    }

    /// Parse and validate from the string forms a front-end collects.
    pub fn parse(
        name: &str,
        date: &str,
        time: &str,
        place: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self, AppError> {
        let date_of_birth = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(date.to_string()))?;
        let time_of_birth = NaiveTime::parse_from_str(time.trim(), "%H:%M")
            .map_err(|_| AppError::InvalidTime(time.to_string()))?;

        Self::new(name, date_of_birth, time_of_birth, place, latitude, longitude)
    }

    /// Coordinates with the (0, 0) default applied.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude.unwrap_or(0.0), self.longitude.unwrap_or(0.0))
    }
}
