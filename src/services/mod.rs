mod chart_service;
mod chart_store_filesystem;
mod geocoder_nominatim;
mod horoscope;
mod interpretation;
mod prompt;
mod text_generator_http;

pub use chart_service::ChartService;
pub use chart_store_filesystem::FilesystemChartStore;
pub use geocoder_nominatim::NominatimGeocoder;
pub use horoscope::daily_horoscope;
pub use interpretation::{
    GenerativeStrategy, InterpretationProducer, InterpretationStrategy, TemplateStrategy,
};
pub use prompt::{ChartContext, render_horoscope_prompt, render_interpretation_prompt};
pub use text_generator_http::{API_KEY_ENV, HttpTextGenerator};
