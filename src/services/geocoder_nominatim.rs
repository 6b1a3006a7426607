//! Nominatim geocoder implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, GeocoderConfig};
use crate::ports::{GeoCandidate, Geocoder};

/// Geocoder backed by a Nominatim-compatible `/search` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    api_url: Url,
    limit: u8,
    client: Client,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), limit: config.limit, client })
    }
}

/// Nominatim returns lat/lon as strings.
#[derive(Debug, Deserialize)]
struct Place {
    display_name: String,
    lat: String,
    lon: String,
}

impl Geocoder for NominatimGeocoder {
    fn search(&self, query: &str) -> Result<Vec<GeoCandidate>, AppError> {
        let response = self
            .client
            .get(self.api_url.clone())
            .query(&[("format", "json"), ("q", query), ("limit", &self.limit.to_string())])
            .send()
            .map_err(|e| AppError::Geocoding(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Geocoding(format!("API error ({})", status.as_u16())));
        }

        let places: Vec<Place> = response
            .json()
            .map_err(|e| AppError::Geocoding(format!("Failed to parse response: {}", e)))?;

        let mut candidates = Vec::with_capacity(places.len());
        for place in places {
            let latitude = place
                .lat
                .parse::<f64>()
                .map_err(|_| AppError::Geocoding(format!("bad latitude '{}'", place.lat)))?;
            let longitude = place
                .lon
                .parse::<f64>()
                .map_err(|_| AppError::Geocoding(format!("bad longitude '{}'", place.lon)))?;
            candidates.push(GeoCandidate { label: place.display_name, latitude, longitude });
        }

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(server: &mockito::Server) -> GeocoderConfig {
        GeocoderConfig {
            api_url: Url::parse(&format!("{}/search", server.url())).unwrap(),
            user_agent: "natal-test".to_string(),
            timeout_secs: 1,
            limit: 5,
        }
    }

    #[test]
    fn search_parses_candidates() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("format".into(), "json".into()),
                mockito::Matcher::UrlEncoded("q".into(), "London".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "5".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"[{"display_name":"London, England","lat":"51.5074","lon":"-0.1278"}]"#,
            )
            .expect(1)
            .create();

        let geocoder = NominatimGeocoder::new(&config_for(&server)).unwrap();
        let candidates = geocoder.search("London").unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].label, "London, England");
        assert!((candidates[0].latitude - 51.5074).abs() < 1e-9);
        assert!((candidates[0].longitude + 0.1278).abs() < 1e-9);
        mock.assert();
    }

    #[test]
    fn search_returns_empty_for_no_matches() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create();

        let geocoder = NominatimGeocoder::new(&config_for(&server)).unwrap();
        assert!(geocoder.search("Nowhereville").unwrap().is_empty());
    }

    #[test]
    fn search_fails_on_server_error() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .create();

        let geocoder = NominatimGeocoder::new(&config_for(&server)).unwrap();
        let err = geocoder.search("London").unwrap_err();
        assert!(matches!(err, AppError::Geocoding(_)));
    }

    #[test]
    fn search_fails_on_unparseable_coordinates() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"[{"display_name":"X","lat":"north","lon":"0"}]"#)
            .create();

        let geocoder = NominatimGeocoder::new(&config_for(&server)).unwrap();
        let err = geocoder.search("X").unwrap_err();
        assert!(matches!(err, AppError::Geocoding(_)));
    }
}
