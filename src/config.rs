//! Configuration for the summarization service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Completion service configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Summarization configuration
    #[serde(default)]
    pub summary: SummaryConfig,
    /// Question-answering configuration
    #[serde(default)]
    pub answer: AnswerConfig,
    /// Upload staging configuration
    #[serde(default)]
    pub staging: StagingConfig,
    /// Document context configuration
    #[serde(default)]
    pub context: ContextConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse '{}': {}", path.display(), e)))
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Maximum upload body size in bytes
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_upload_size: 50 * 1024 * 1024, // 50MB
        }
    }
}

/// Completion service configuration (OpenRouter-compatible chat API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Referer header sent with each request
    pub referer: String,
    /// Application title header sent with each request
    pub app_title: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "meta-llama/llama-3.1-8b-instruct".to_string(),
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            referer: "http://localhost:5000".to_string(),
            app_title: "Research Paper Summarizer".to_string(),
            timeout_secs: 60,
        }
    }
}

impl LlmConfig {
    /// Resolve the API key from the configured environment variable
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env).map_err(|_| {
            Error::Config(format!("Missing API key: set the {} environment variable", self.api_key_env))
        })
    }
}

/// Summarization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Minimum accepted summary length in words (inclusive)
    pub min_words: usize,
    /// Maximum accepted summary length in words (inclusive)
    pub max_words: usize,
    /// Target length requested in the prompt, in words
    pub target_words: usize,
    /// Token budget for the generated summary
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Input is truncated to this many characters before prompting
    pub max_input_chars: usize,
    /// Inputs shorter than this many words are rejected
    pub min_input_words: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            min_words: 200,
            max_words: 300,
            target_words: 250,
            max_tokens: 333, // ~250 words
            temperature: 0.7,
            max_input_chars: 4000,
            min_input_words: 10,
        }
    }
}

/// Question-answering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerConfig {
    /// Token budget for the generated answer
    pub max_tokens: u32,
    /// Context is truncated to this many characters before prompting
    pub max_context_chars: usize,
    /// Contexts shorter than this many words are rejected
    pub min_context_words: usize,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            max_tokens: 200,
            max_context_chars: 4000,
            min_context_words: 10,
        }
    }
}

/// Upload staging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagingConfig {
    /// Directory holding transient uploads
    pub dir: PathBuf,
    /// Deletion attempts before reporting a cleanup failure
    pub cleanup_retries: u32,
    /// Delay between deletion attempts in milliseconds
    pub cleanup_delay_ms: u64,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("uploads"),
            cleanup_retries: 3,
            cleanup_delay_ms: 1000,
        }
    }
}

/// Document context configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Seconds after which a loaded context expires; `None` keeps it until replaced or cleared
    pub max_age_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_pipeline_contracts() {
        let config = AppConfig::default();
        assert_eq!(config.summary.min_words, 200);
        assert_eq!(config.summary.max_words, 300);
        assert_eq!(config.summary.max_tokens, 333);
        assert_eq!(config.summary.max_input_chars, 4000);
        assert_eq!(config.answer.max_tokens, 200);
        assert_eq!(config.staging.cleanup_retries, 3);
        assert!(config.context.max_age_secs.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            max_upload_size = 1048576

            [summary]
            min_words = 150
            max_words = 250
            target_words = 200
            max_tokens = 300
            temperature = 0.5
            max_input_chars = 2000
            min_input_words = 5
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.summary.min_words, 150);
        // Unspecified sections keep their defaults
        assert_eq!(config.answer.max_tokens, 200);
        assert_eq!(config.llm.model, "meta-llama/llama-3.1-8b-instruct");
    }
}
