//! API payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pipeline::IngestReport;

/// Successful upload payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Length-gated summary of the uploaded document
    pub summary: String,
    /// Pages in the document (best-effort)
    pub page_count: u32,
    /// Extracted text length in characters
    pub text_length: usize,
}

impl From<IngestReport> for UploadResponse {
    fn from(report: IngestReport) -> Self {
        Self {
            summary: report.summary,
            page_count: report.page_count,
            text_length: report.text_length,
        }
    }
}

/// Question request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    /// Free-form question against the loaded document
    #[serde(default)]
    pub question: String,
}

/// Successful answer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// Raw answer text, whitespace-trimmed
    pub answer: String,
}

/// Context status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextStatus {
    /// Whether a non-expired context is loaded
    pub loaded: bool,
    /// Context text length in characters, when loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_length: Option<usize>,
    /// Filename the context came from, when loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_filename: Option<String>,
    /// When the context was loaded, when loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
}

impl ContextStatus {
    /// Status for an empty slot
    pub fn empty() -> Self {
        Self {
            loaded: false,
            text_length: None,
            source_filename: None,
            loaded_at: None,
        }
    }
}
