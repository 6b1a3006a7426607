//! Geocoding port definition.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// One geocoding candidate for a free-text place query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCandidate {
    /// Human-readable display label.
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Port for place-name lookup.
///
/// Lookups are best-effort: callers treat failures and empty results as
/// "no coordinates" and proceed with the (0, 0) default.
pub trait Geocoder {
    /// Search for candidates matching a free-text query, best match first.
    fn search(&self, query: &str) -> Result<Vec<GeoCandidate>, AppError>;
}

/// Mock geocoder returning a single fixed candidate.
#[derive(Debug, Clone)]
pub struct MockGeocoder {
    pub candidate: GeoCandidate,
}

impl Default for MockGeocoder {
    fn default() -> Self {
        Self {
            candidate: GeoCandidate {
                label: "London, Greater London, England, United Kingdom".to_string(),
                latitude: 51.5074,
                longitude: -0.1278,
            },
        }
    }
}

impl Geocoder for MockGeocoder {
    fn search(&self, _query: &str) -> Result<Vec<GeoCandidate>, AppError> {
        Ok(vec![self.candidate.clone()])
    }
}
