//! Single-slot document context for question answering
//!
//! Replaces the implicit "most recent document" global with an explicit
//! store: one slot, guarded by a lock, with a clear call and an optional
//! expiry. The slot is written only by a successful extraction and read
//! only by question answering.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::time::Duration;

use crate::config::ContextConfig;

/// Text of the most recently extracted document
#[derive(Debug, Clone)]
pub struct DocumentContext {
    /// Extracted document text
    pub text: String,
    /// Filename the text was extracted from
    pub source_filename: String,
    /// When the context was loaded
    pub loaded_at: DateTime<Utc>,
}

/// Holds the single most-recently-extracted document's text
pub struct ContextStore {
    slot: RwLock<Option<DocumentContext>>,
    max_age: Option<Duration>,
}

impl ContextStore {
    /// Create a new store from configuration
    pub fn new(config: &ContextConfig) -> Self {
        Self {
            slot: RwLock::new(None),
            max_age: config.max_age_secs.map(Duration::from_secs),
        }
    }

    /// Replace the stored context with a newly extracted document
    pub fn replace(&self, text: String, source_filename: String) {
        tracing::info!(
            "Context updated from '{}' ({} chars)",
            source_filename,
            text.len()
        );
        *self.slot.write() = Some(DocumentContext {
            text,
            source_filename,
            loaded_at: Utc::now(),
        });
    }

    /// Get the current context, dropping it first if it has expired
    pub fn current(&self) -> Option<DocumentContext> {
        {
            let slot = self.slot.read();
            match slot.as_ref() {
                Some(ctx) if !self.is_expired(ctx) => return Some(ctx.clone()),
                None => return None,
                Some(_) => {}
            }
        }
        // Expired: clear lazily under the write lock, re-checking first
        let mut slot = self.slot.write();
        if slot.as_ref().is_some_and(|ctx| self.is_expired(ctx)) {
            tracing::info!("Document context expired, clearing");
            *slot = None;
        }
        slot.clone()
    }

    /// Clear the stored context
    pub fn clear(&self) {
        *self.slot.write() = None;
    }

    /// Whether a non-expired context is loaded
    pub fn is_loaded(&self) -> bool {
        self.current().is_some()
    }

    fn is_expired(&self, ctx: &DocumentContext) -> bool {
        match self.max_age {
            Some(max_age) => {
                let age = Utc::now().signed_duration_since(ctx.loaded_at);
                age.to_std().map(|a| a > max_age).unwrap_or(false)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_has_no_context() {
        let store = ContextStore::new(&ContextConfig::default());
        assert!(store.current().is_none());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_replace_and_read() {
        let store = ContextStore::new(&ContextConfig::default());
        store.replace("the quick brown fox".to_string(), "paper.pdf".to_string());

        let ctx = store.current().expect("context loaded");
        assert_eq!(ctx.text, "the quick brown fox");
        assert_eq!(ctx.source_filename, "paper.pdf");
        assert!(store.is_loaded());
    }

    #[test]
    fn test_replace_overwrites_previous_slot() {
        let store = ContextStore::new(&ContextConfig::default());
        store.replace("first".to_string(), "a.pdf".to_string());
        store.replace("second".to_string(), "b.pdf".to_string());

        let ctx = store.current().unwrap();
        assert_eq!(ctx.text, "second");
        assert_eq!(ctx.source_filename, "b.pdf");
    }

    #[test]
    fn test_clear_empties_the_slot() {
        let store = ContextStore::new(&ContextConfig::default());
        store.replace("text".to_string(), "a.pdf".to_string());
        store.clear();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_expired_context_reads_as_absent() {
        let store = ContextStore::new(&ContextConfig { max_age_secs: Some(1) });
        store.replace("text".to_string(), "a.pdf".to_string());

        // Backdate the slot past the expiry window
        {
            let mut slot = store.slot.write();
            if let Some(ctx) = slot.as_mut() {
                ctx.loaded_at = Utc::now() - chrono::Duration::seconds(5);
            }
        }

        assert!(store.current().is_none());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_fresh_context_survives_expiry_check() {
        let store = ContextStore::new(&ContextConfig { max_age_secs: Some(3600) });
        store.replace("text".to_string(), "a.pdf".to_string());
        assert!(store.current().is_some());
    }
}
