//! Upload ingestion pipeline
//!
//! Orchestrates one upload end to end: filename validation, staging,
//! extraction, context update, summarization, and staged-file cleanup with
//! bounded retries. The staged file is removed exactly once per upload,
//! whichever stage failed.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::config::StagingConfig;
use crate::context::ContextStore;
use crate::error::{Error, Result};
use crate::extraction::PdfExtractor;
use crate::generation::SummaryGenerator;

/// Successful pipeline outcome
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// The length-gated summary
    pub summary: String,
    /// Summary word count
    pub summary_word_count: usize,
    /// Pages seen during the extraction pass
    pub page_count: u32,
    /// Extracted text length in characters
    pub text_length: usize,
}

/// Orchestrates extraction, context update, summarization, and cleanup
pub struct IngestionPipeline {
    context: Arc<ContextStore>,
    summarizer: SummaryGenerator,
    staging: StagingConfig,
}

impl IngestionPipeline {
    /// Create a new pipeline
    pub fn new(
        context: Arc<ContextStore>,
        summarizer: SummaryGenerator,
        staging: StagingConfig,
    ) -> Self {
        Self {
            context,
            summarizer,
            staging,
        }
    }

    /// Process one uploaded document.
    ///
    /// The context is updated as soon as extraction succeeds; a later
    /// summarization failure does not roll it back. A cleanup failure takes
    /// precedence over the summarization outcome.
    pub async fn process(&self, filename: &str, data: &[u8]) -> Result<IngestReport> {
        if !filename.to_lowercase().ends_with(".pdf") {
            return Err(Error::invalid_input(format!(
                "invalid file format '{}', please upload a PDF",
                filename
            )));
        }

        let safe_name = sanitize_filename(filename);
        if safe_name.is_empty() {
            return Err(Error::invalid_input("filename reduces to nothing after sanitization"));
        }

        self.ensure_staging_dir().await?;

        let staged = self.staging.dir.join(&safe_name);
        tracing::debug!("Staging upload at {}", staged.display());
        tokio::fs::write(&staged, data).await.map_err(|e| {
            Error::environment(format!("failed to save upload to '{}': {}", staged.display(), e))
        })?;

        // Extraction is synchronous CPU work; keep it off the runtime threads
        let extract_path = staged.clone();
        let extracted = tokio::task::spawn_blocking(move || PdfExtractor::extract(&extract_path))
            .await
            .map_err(|e| Error::internal(format!("extraction task failed: {}", e)))?;

        let document = match extracted {
            Ok(document) => document,
            Err(e) => {
                // Best-effort cleanup; the extraction failure is what we report
                if let Err(cleanup_err) = self.remove_with_retry(&staged).await {
                    tracing::warn!("Cleanup after extraction failure: {}", cleanup_err);
                }
                return Err(e);
            }
        };

        // Context update is not contingent on summarization succeeding
        self.context
            .replace(document.text.clone(), filename.to_string());

        let summary_result = self.summarizer.summarize(&document.text).await;

        // Cleanup runs regardless of the summarization outcome and its
        // failure takes precedence over it
        self.remove_with_retry(&staged).await?;

        let summary = summary_result?;

        tracing::info!(
            "Ingested '{}': {} pages, {} chars, {}-word summary",
            filename,
            document.page_count,
            document.text.chars().count(),
            summary.word_count
        );

        Ok(IngestReport {
            summary: summary.text,
            summary_word_count: summary.word_count,
            page_count: document.page_count,
            text_length: document.text.chars().count(),
        })
    }

    /// Ensure the staging directory exists and is writable
    async fn ensure_staging_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.staging.dir).await.map_err(|e| {
            Error::environment(format!(
                "cannot create staging directory '{}': {}",
                self.staging.dir.display(),
                e
            ))
        })?;

        let probe = self.staging.dir.join(".write_probe");
        tokio::fs::write(&probe, b"probe").await.map_err(|e| {
            Error::environment(format!(
                "staging directory '{}' is not writable: {}",
                self.staging.dir.display(),
                e
            ))
        })?;
        let _ = tokio::fs::remove_file(&probe).await;
        Ok(())
    }

    /// Remove the staged file, retrying transient deletion failures
    async fn remove_with_retry(&self, path: &Path) -> Result<()> {
        let target: PathBuf = path.to_path_buf();
        let removed = retry_removal(
            || {
                let target = target.clone();
                async move {
                    match tokio::fs::remove_file(&target).await {
                        Ok(()) => Ok(()),
                        // Already gone counts as success
                        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                        Err(e) => Err(e),
                    }
                }
            },
            self.staging.cleanup_retries,
            Duration::from_millis(self.staging.cleanup_delay_ms),
        )
        .await;

        if removed {
            tracing::debug!("Staged file removed: {}", path.display());
            Ok(())
        } else {
            Err(Error::Cleanup {
                path: path.display().to_string(),
                attempts: self.staging.cleanup_retries,
            })
        }
    }
}

/// Run `operation` up to `retries` times with `delay` between attempts,
/// returning whether any attempt succeeded.
pub(crate) async fn retry_removal<F, Fut>(mut operation: F, retries: u32, delay: Duration) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<()>>,
{
    for attempt in 1..=retries {
        match operation().await {
            Ok(()) => return true,
            Err(e) => {
                tracing::warn!("Deletion attempt {}/{} failed: {}", attempt, retries, e);
                if attempt < retries {
                    sleep(delay).await;
                }
            }
        }
    }
    false
}

/// Reduce an upload name to a safe single path component
fn sanitize_filename(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    cleaned.trim_start_matches('.').to_string()
}
