//! Error types for the summarization service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client-side input validation failure (bad filename, empty question, missing file)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Server environment failure (staging area not writable, file not saved)
    #[error("Environment error: {0}")]
    Environment(String),

    /// Text extraction failure (missing file, corrupt document, no text found)
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// Input too short for summarization
    #[error("Input text is too short for summarization: {words} words (minimum {min})")]
    InputTooShort { words: usize, min: usize },

    /// No document context loaded for question answering
    #[error("No valid context available: {0}")]
    NoContext(String),

    /// Completion service transport failure
    #[error("Completion request failed: {0}")]
    Llm(String),

    /// Completion service returned a non-success status
    #[error("Completion service returned HTTP {status}: {body}")]
    LlmStatus { status: u16, body: String },

    /// Completion request exceeded the configured timeout
    #[error("Completion request timed out after {0}s")]
    LlmTimeout(u64),

    /// Completion response could not be interpreted
    #[error("Malformed completion response: {0}")]
    LlmResponse(String),

    /// Summary word count outside the accepted range
    #[error("Summary length ({words} words) is outside the desired range ({min}-{max} words)")]
    QualityGate { words: usize, min: usize, max: usize },

    /// Staged file could not be deleted after bounded retries
    #[error("Failed to delete staged file '{path}' after {attempts} attempts")]
    Cleanup { path: String, attempts: u32 },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an input validation error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an environment error
    pub fn environment(message: impl Into<String>) -> Self {
        Self::Environment(message.into())
    }

    /// Create an extraction error
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction(message.into())
    }

    /// Create a completion transport error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            Error::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error", msg.clone()),
            Error::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "invalid_input", msg.clone()),
            Error::Environment(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "environment_error", msg.clone())
            }
            Error::Extraction(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "extraction_error", msg.clone())
            }
            Error::InputTooShort { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "input_too_short", self.to_string())
            }
            Error::NoContext(msg) => (StatusCode::BAD_REQUEST, "no_context", msg.clone()),
            Error::Llm(msg) => (StatusCode::BAD_GATEWAY, "llm_error", msg.clone()),
            Error::LlmStatus { .. } => (StatusCode::BAD_GATEWAY, "llm_status", self.to_string()),
            Error::LlmTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, "llm_timeout", self.to_string()),
            Error::LlmResponse(msg) => (StatusCode::BAD_GATEWAY, "llm_response", msg.clone()),
            Error::QualityGate { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "quality_gate", self.to_string())
            }
            Error::Cleanup { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "cleanup_error", self.to_string())
            }
            Error::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
