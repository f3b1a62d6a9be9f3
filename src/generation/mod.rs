//! Remote text generation: prompts, the completion client, and the two
//! operations built on it (summarization and question answering)

pub mod answer;
pub mod openrouter;
pub mod prompt;
pub mod summarize;

pub use answer::QuestionAnswerer;
pub use openrouter::{CompletionProvider, CompletionRequest, OpenRouterClient};
pub use prompt::PromptBuilder;
pub use summarize::{Summary, SummaryGenerator};

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use crate::error::{Error, Result};

    use super::openrouter::{CompletionProvider, CompletionRequest};

    /// Scripted provider that records requests and replays a fixed outcome
    pub(crate) struct MockProvider {
        response: Result<String>,
        pub calls: AtomicUsize,
        pub last_request: Mutex<Option<CompletionRequest>>,
    }

    impl MockProvider {
        pub fn returning(response: impl Into<String>) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(response.into()),
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            })
        }

        pub fn failing(error: Error) -> Arc<Self> {
            Arc::new(Self {
                response: Err(error),
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            })
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionProvider for MockProvider {
        async fn complete(&self, request: CompletionRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock() = Some(request);
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(Error::internal(format!("scripted failure: {}", e))),
            }
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "mock"
        }

        fn model(&self) -> &str {
            "mock-model"
        }
    }

    /// `n` copies of "word" separated by single spaces
    pub(crate) fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }
}
