//! Context-grounded question answering

use std::sync::Arc;

use crate::config::AnswerConfig;
use crate::error::{Error, Result};

use super::openrouter::{CompletionProvider, CompletionRequest};
use super::prompt::{self, PromptBuilder, QA_SYSTEM_PROMPT};
use super::word_count;

/// Answers questions against a previously extracted document
pub struct QuestionAnswerer {
    provider: Arc<dyn CompletionProvider>,
    config: AnswerConfig,
}

impl QuestionAnswerer {
    /// Create a new answerer
    pub fn new(provider: Arc<dyn CompletionProvider>, config: AnswerConfig) -> Self {
        Self { provider, config }
    }

    /// Answer `question` against `context`.
    ///
    /// The caller validates the question; this component validates the
    /// context. The context is truncated to the configured character budget,
    /// the question never is. No length gate is applied to answers.
    pub async fn answer(&self, question: &str, context: &str) -> Result<String> {
        let context_words = word_count(context);
        if context.trim().is_empty() || context_words < self.config.min_context_words {
            return Err(Error::NoContext(
                "no valid context available for question-answering".to_string(),
            ));
        }

        let excerpt = prompt::truncate_chars(context, self.config.max_context_chars);
        tracing::debug!("Answering question against {} chars of context", excerpt.len());

        let answer = self
            .provider
            .complete(CompletionRequest {
                system: QA_SYSTEM_PROMPT.to_string(),
                user: PromptBuilder::build_qa_prompt(question, excerpt),
                max_tokens: self.config.max_tokens,
                temperature: None,
            })
            .await?;

        Ok(answer.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::testing::{words, MockProvider};

    fn answerer(provider: Arc<MockProvider>) -> QuestionAnswerer {
        QuestionAnswerer::new(provider, AnswerConfig::default())
    }

    #[tokio::test]
    async fn test_empty_context_rejected_without_remote_call() {
        let provider = MockProvider::returning("irrelevant");
        let qa = answerer(provider.clone());

        let err = qa.answer("What is the main finding?", "").await.unwrap_err();
        assert!(matches!(err, Error::NoContext(_)));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_short_context_rejected() {
        let provider = MockProvider::returning("irrelevant");
        let qa = answerer(provider.clone());

        let err = qa.answer("Why?", &words(9)).await.unwrap_err();
        assert!(matches!(err, Error::NoContext(_)));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_answer_passed_through_trimmed() {
        let provider = MockProvider::returning("  The finding is X.  ");
        let qa = answerer(provider.clone());

        let answer = qa.answer("What is the finding?", &words(20)).await.unwrap();
        assert_eq!(answer, "The finding is X.");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_context_truncated_but_question_untouched() {
        let provider = MockProvider::returning("answer");
        let qa = answerer(provider.clone());

        let long_context = words(2000); // 9999 chars
        let long_question = format!("Considering everything, {}?", words(30));
        qa.answer(&long_question, &long_context).await.unwrap();

        let request = provider.last_request.lock().clone().unwrap();
        assert!(request.user.contains(&long_context[..4000]));
        assert!(!request.user.contains(&long_context[..4010]));
        assert!(request.user.contains(&long_question));
        assert_eq!(request.max_tokens, 200);
        assert_eq!(request.temperature, None);
        assert!(request.system.contains("answers questions"));
    }
}
