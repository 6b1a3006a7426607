use std::io;

use thiserror::Error;

/// Library-wide error type for natal operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Name field is empty or whitespace-only.
    #[error("Name must not be empty")]
    EmptyName,

    /// Birth place field is empty or whitespace-only.
    #[error("Place of birth must not be empty")]
    EmptyPlace,

    /// Birth date could not be parsed.
    #[error("Invalid birth date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Birth time could not be parsed.
    #[error("Invalid birth time '{0}': expected HH:MM")]
    InvalidTime(String),

    /// Latitude or longitude outside its valid range.
    #[error("{axis} {value} out of range: must be within [{min}, {max}]")]
    CoordinateOutOfRange { axis: &'static str, value: f64, min: f64, max: f64 },

    /// External text-generation call failed or returned no usable text.
    ///
    /// Recovered locally by the template fallback during chart assembly;
    /// surfaced only for daily horoscopes, which have no fallback.
    #[error("Text generation failed: {0}")]
    Generation(String),

    /// Internal resolver or generator failure during chart assembly.
    #[error("Chart generation failed: {0}")]
    ChartGeneration(String),

    /// No stored chart with the given identifier.
    #[error("Chart '{0}' not found")]
    ChartNotFound(String),

    /// Geocoding lookup failed.
    #[error("Geocoding failed: {0}")]
    Geocoding(String),

    /// Stored chart file could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Config file could not be parsed.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// True for input-shaped errors the caller should surface as validation
    /// feedback rather than a generic retry message.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::EmptyName
                | AppError::EmptyPlace
                | AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
                | AppError::CoordinateOutOfRange { .. }
        )
    }
}
