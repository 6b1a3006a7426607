pub mod birth;
pub mod chart;
pub mod config;
pub mod error;
pub mod positions;
pub mod zodiac;

pub use birth::BirthInput;
pub use chart::{ChartRecord, DailyHoroscope, HouseCusp, Planet, PlanetPosition};
pub use config::{AppConfig, CONFIG_FILE, GeneratorConfig, GeocoderConfig, StorageConfig};
pub use error::AppError;
pub use positions::{generate_houses, generate_planets};
pub use zodiac::{ZodiacSign, moon_sign, rising_sign, sun_sign};
