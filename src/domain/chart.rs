//! Chart record types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{BirthInput, ZodiacSign};

/// The eight planets placed in a chart, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Planet {
    /// All planets in placement order.
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A planet placed in a sign, degree and house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: Planet,
    pub sign: ZodiacSign,
    /// Degree within the sign, in `[0, 30)`.
    pub degree: f64,
    /// House number in `1..=12`.
    pub house: u8,
}

/// One of the 12 house cusps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number in `1..=12`, unique per chart.
    pub number: u8,
    pub sign: ZodiacSign,
    /// Degree within the sign, in `[0, 30)`.
    pub degree: f64,
}

/// A fully assembled natal chart.
///
/// Immutable after assembly: the store fills `id` and `owner` when saving,
/// the astrological fields never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub input: BirthInput,
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub rising_sign: ZodiacSign,
    /// Always 8 entries, one per planet, in [`Planet::ALL`] order.
    pub planets: Vec<PlanetPosition>,
    /// Always 12 entries, house numbers 1..=12 ascending.
    pub houses: Vec<HouseCusp>,
    pub interpretation: String,
    pub created_at: DateTime<Utc>,
}

/// A cached daily horoscope for a saved chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyHoroscope {
    pub chart_id: String,
    pub date: NaiveDate,
    pub horoscope: String,
    pub created_at: DateTime<Utc>,
}
