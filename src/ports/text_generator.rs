//! Text-generation port definition.

use crate::domain::AppError;

/// Port for external text generation.
///
/// Implementations make a single attempt: they either return usable text or
/// fail with [`AppError::Generation`]. Retry policy is out of scope.
pub trait TextGenerator {
    /// Generate text for the given prompt.
    fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Mock generator for testing without API calls.
#[derive(Debug, Clone)]
pub struct MockTextGenerator {
    pub response: String,
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self { response: "A mock reading of your cosmic blueprint.".to_string() }
    }
}

impl MockTextGenerator {
    pub fn with_response<S: Into<String>>(response: S) -> Self {
        Self { response: response.into() }
    }
}

impl TextGenerator for MockTextGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        Ok(self.response.clone())
    }
}

/// Generator that always fails; used to exercise the fallback path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingTextGenerator;

impl TextGenerator for FailingTextGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        Err(AppError::Generation("service unavailable".to_string()))
    }
}
