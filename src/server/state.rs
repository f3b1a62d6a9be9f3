//! Application state for the HTTP server

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::AppConfig;
use crate::context::ContextStore;
use crate::error::Result;
use crate::generation::{CompletionProvider, OpenRouterClient, QuestionAnswerer, SummaryGenerator};
use crate::pipeline::IngestionPipeline;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: AppConfig,
    /// Single-slot document context
    context: Arc<ContextStore>,
    /// Upload ingestion pipeline
    pipeline: IngestionPipeline,
    /// Question answerer
    answerer: QuestionAnswerer,
    /// Completion provider (for health checks)
    provider: Arc<dyn CompletionProvider>,
    /// Ready state
    ready: RwLock<bool>,
}

impl AppState {
    /// Create new application state with the OpenRouter backend
    pub fn new(config: AppConfig) -> Result<Self> {
        let provider: Arc<dyn CompletionProvider> = Arc::new(OpenRouterClient::new(&config.llm)?);
        Ok(Self::with_provider(config, provider))
    }

    /// Create new application state with an explicit completion provider
    pub fn with_provider(config: AppConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        tracing::info!(
            "Initializing application state (provider: {}, model: {})",
            provider.name(),
            provider.model()
        );

        let context = Arc::new(ContextStore::new(&config.context));
        let summarizer = SummaryGenerator::new(Arc::clone(&provider), config.summary.clone());
        let pipeline =
            IngestionPipeline::new(Arc::clone(&context), summarizer, config.staging.clone());
        let answerer = QuestionAnswerer::new(Arc::clone(&provider), config.answer.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                context,
                pipeline,
                answerer,
                provider,
                ready: RwLock::new(true),
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get the context store
    pub fn context(&self) -> &Arc<ContextStore> {
        &self.inner.context
    }

    /// Get the ingestion pipeline
    pub fn pipeline(&self) -> &IngestionPipeline {
        &self.inner.pipeline
    }

    /// Get the question answerer
    pub fn answerer(&self) -> &QuestionAnswerer {
        &self.inner.answerer
    }

    /// Get the completion provider
    pub fn provider(&self) -> &Arc<dyn CompletionProvider> {
        &self.inner.provider
    }

    /// Check if the server is ready
    pub fn is_ready(&self) -> bool {
        *self.inner.ready.read()
    }

    /// Set ready state
    pub fn set_ready(&self, ready: bool) {
        *self.inner.ready.write() = ready;
    }
}
