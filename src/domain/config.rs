//! Application configuration loaded from `natal.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "natal.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Text-generation API settings.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Geocoding API settings.
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    /// Chart storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load from `natal.toml` in the working directory, falling back to
    /// defaults when the file is absent.
    pub fn load() -> Result<Self, AppError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from an explicit path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Text-generation API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Base endpoint URL; the model segment is appended per request.
    #[serde(default = "default_generator_url")]
    pub api_url: Url,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Whether to attempt generative interpretations at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_url: default_generator_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            enabled: default_true(),
        }
    }
}

/// Geocoding API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderConfig {
    /// Search endpoint URL.
    #[serde(default = "default_geocoder_url")]
    pub api_url: Url,
    /// User-Agent header value; the Nominatim usage policy requires one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum number of candidates per lookup.
    #[serde(default = "default_limit")]
    pub limit: u8,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            api_url: default_geocoder_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
            limit: default_limit(),
        }
    }
}

/// Chart storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory for saved charts and cached horoscopes.
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { dir: default_storage_dir() }
    }
}

fn default_generator_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta/models")
        .expect("Default generator URL must be valid")
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_geocoder_url() -> Url {
    Url::parse("https://nominatim.openstreetmap.org/search")
        .expect("Default geocoder URL must be valid")
}

fn default_user_agent() -> String {
    format!("natal/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout() -> u64 {
    30
}

fn default_limit() -> u8 {
    5
}

fn default_true() -> bool {
    true
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".natal")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load_from(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.generator.model, "gemini-pro");
        assert_eq!(config.storage.dir, PathBuf::from(".natal"));
        assert!(config.generator.enabled);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [generator]
            model = "gemini-flash-latest"
            enabled = false

            [storage]
            dir = "charts"
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.model, "gemini-flash-latest");
        assert!(!config.generator.enabled);
        assert_eq!(config.generator.timeout_secs, 30);
        assert_eq!(config.storage.dir, PathBuf::from("charts"));
        assert_eq!(config.geocoder.limit, 5);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "generator = 5").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }
}
