mod chart_store;
mod geocoder;
mod text_generator;

pub use chart_store::ChartStore;
pub use geocoder::{GeoCandidate, Geocoder, MockGeocoder};
pub use text_generator::{FailingTextGenerator, MockTextGenerator, TextGenerator};
