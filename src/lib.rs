//! paperlens: research-paper summarization and Q&A service
//!
//! Ingests one uploaded PDF, extracts its text, obtains a length-gated
//! abstractive summary from an OpenRouter-compatible completion service, and
//! answers free-form questions against the stored document text.

pub mod config;
pub mod context;
pub mod error;
pub mod extraction;
pub mod generation;
pub mod pipeline;
pub mod server;
pub mod types;

pub use config::AppConfig;
pub use context::{ContextStore, DocumentContext};
pub use error::{Error, Result};
pub use extraction::{ExtractedDocument, PdfExtractor};
pub use generation::{
    CompletionProvider, CompletionRequest, OpenRouterClient, QuestionAnswerer, Summary,
    SummaryGenerator,
};
pub use pipeline::{IngestReport, IngestionPipeline};
pub use server::ApiServer;
