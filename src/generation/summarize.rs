//! Abstractive summarization with a strict post-hoc length gate

use std::sync::Arc;

use crate::config::SummaryConfig;
use crate::error::{Error, Result};

use super::openrouter::{CompletionProvider, CompletionRequest};
use super::prompt::{self, PromptBuilder, SUMMARY_SYSTEM_PROMPT};
use super::word_count;

/// A summary that passed the length gate
#[derive(Debug, Clone)]
pub struct Summary {
    /// The trimmed summary text
    pub text: String,
    /// Whitespace-split word count
    pub word_count: usize,
}

/// Generates length-gated summaries via the completion provider
pub struct SummaryGenerator {
    provider: Arc<dyn CompletionProvider>,
    config: SummaryConfig,
}

impl SummaryGenerator {
    /// Create a new generator
    pub fn new(provider: Arc<dyn CompletionProvider>, config: SummaryConfig) -> Self {
        Self { provider, config }
    }

    /// Summarize `text`, enforcing the configured word-count range on the result.
    ///
    /// Exactly one remote call per invocation; a summary outside the range is
    /// a hard failure, not retried or re-prompted.
    pub async fn summarize(&self, text: &str) -> Result<Summary> {
        let input_words = word_count(text);
        if text.trim().is_empty() || input_words < self.config.min_input_words {
            return Err(Error::InputTooShort {
                words: input_words,
                min: self.config.min_input_words,
            });
        }

        // The remote context window is bounded; truncation is positional
        let excerpt = prompt::truncate_chars(text, self.config.max_input_chars);
        tracing::debug!("Summarizing {} chars (of {})", excerpt.len(), text.len());

        let raw = self
            .provider
            .complete(CompletionRequest {
                system: SUMMARY_SYSTEM_PROMPT.to_string(),
                user: PromptBuilder::build_summary_prompt(excerpt, self.config.target_words),
                max_tokens: self.config.max_tokens,
                temperature: Some(self.config.temperature),
            })
            .await?;

        let summary = raw.trim();
        let words = word_count(summary);
        tracing::info!("Summary length: {} words", words);

        if words < self.config.min_words || words > self.config.max_words {
            return Err(Error::QualityGate {
                words,
                min: self.config.min_words,
                max: self.config.max_words,
            });
        }

        Ok(Summary {
            text: summary.to_string(),
            word_count: words,
        })
    }
}
