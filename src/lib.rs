//! natal: compute simplified natal charts with narrative interpretations.
//!
//! The core maps a validated birth input (date, time, place, optional
//! coordinates) to sun/moon/rising placements, synthetic planetary positions
//! and house cusps, and a narrative interpretation produced either by an
//! external text-generation service or by built-in per-sign templates.
//! Geocoding, text generation and persistence are collaborators behind
//! ports; the chart computation itself is pure and stateless.

pub mod domain;
pub mod ports;
pub mod services;

pub use domain::{
    AppConfig, AppError, BirthInput, ChartRecord, DailyHoroscope, HouseCusp, Planet,
    PlanetPosition, ZodiacSign,
};
pub use ports::{ChartStore, GeoCandidate, Geocoder, TextGenerator};
pub use services::{ChartService, FilesystemChartStore, HttpTextGenerator, NominatimGeocoder};

/// Generate a chart with configuration loaded from `natal.toml`.
///
/// When the generator is enabled and `NATAL_API_KEY` is set, the
/// interpretation comes from the text-generation service with template
/// fallback; otherwise the templates are used directly.
pub fn generate_chart(input: BirthInput) -> Result<ChartRecord, AppError> {
    let config = AppConfig::load()?;
    generate_chart_with_config(input, &config)
}

/// Generate a chart with an explicit configuration.
pub fn generate_chart_with_config(
    input: BirthInput,
    config: &AppConfig,
) -> Result<ChartRecord, AppError> {
    if config.generator.enabled
        && let Ok(generator) = HttpTextGenerator::from_env(&config.generator)
    {
        return ChartService::with_generator(&generator).assemble(input);
    }
    ChartService::template_only().assemble(input)
}

/// Persist a chart and return its assigned identifier.
pub fn save_chart(chart: &ChartRecord, owner: Option<&str>) -> Result<String, AppError> {
    let config = AppConfig::load()?;
    let store = FilesystemChartStore::new(config.storage.dir.clone());
    store.save(chart, owner)
}

/// List saved charts newest-first, optionally filtered by owner.
pub fn history(owner: Option<&str>) -> Result<Vec<ChartRecord>, AppError> {
    let config = AppConfig::load()?;
    let store = FilesystemChartStore::new(config.storage.dir.clone());
    store.list(owner)
}

/// Today's horoscope for a saved chart.
///
/// Requires `NATAL_API_KEY`: the daily horoscope has no template fallback,
/// so a missing key or a failed generation call is an error.
pub fn horoscope(chart_id: &str) -> Result<String, AppError> {
    let config = AppConfig::load()?;
    let store = FilesystemChartStore::new(config.storage.dir.clone());
    let generator = HttpTextGenerator::from_env(&config.generator)?;
    let today = chrono::Utc::now().date_naive();
    services::daily_horoscope(&store, &generator, chart_id, today)
}

/// Look up coordinates for a free-text place query, best match first.
pub fn geocode(query: &str) -> Result<Vec<GeoCandidate>, AppError> {
    let config = AppConfig::load()?;
    let geocoder = NominatimGeocoder::new(&config.geocoder)?;
    geocoder.search(query)
}
