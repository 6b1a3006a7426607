//! Text-generation client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GeneratorConfig};
use crate::ports::TextGenerator;

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";

/// Environment variable holding the text-generation API key.
pub const API_KEY_ENV: &str = "NATAL_API_KEY";

/// HTTP client for a Gemini-style `generateContent` endpoint.
///
/// Single-attempt by design: a failed call surfaces as
/// [`AppError::Generation`] and the interpretation producer handles the
/// fallback.
#[derive(Clone)]
pub struct HttpTextGenerator {
    api_key: String,
    api_url: Url,
    model: String,
    client: Client,
}

impl std::fmt::Debug for HttpTextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTextGenerator")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpTextGenerator {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeneratorConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            client,
        })
    }

    /// Create from the `NATAL_API_KEY` environment variable.
    pub fn from_env(config: &GeneratorConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            AppError::Configuration(format!("{} environment variable not set", API_KEY_ENV))
        })?;

        Self::new(api_key, config)
    }

    fn request_url(&self) -> Result<Url, AppError> {
        let base = self.api_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}/{}:generateContent", base, self.model))
            .map_err(|e| AppError::Generation(format!("invalid request URL: {}", e)))
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl TextGenerator for HttpTextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let api_request =
            ApiRequest { contents: vec![Content { parts: vec![Part { text: prompt.to_string() }] }] };

        let response = self
            .client
            .post(self.request_url()?)
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&api_request)
            .send()
            .map_err(|e| AppError::Generation(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Generation(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AppError::Generation(format!("Failed to parse response: {}", e)))?;

        let text = api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<Vec<_>>().join(""))
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AppError::Generation("No text in response".to_string()));
        }

        Ok(text)
    }
}
