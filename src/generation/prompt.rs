//! Prompt templates for summarization and question answering

/// System prompt for the summarization call
pub const SUMMARY_SYSTEM_PROMPT: &str =
    "You are an assistant that generates concise summaries of research papers.";

/// System prompt for the question-answering call
pub const QA_SYSTEM_PROMPT: &str =
    "You are an assistant that answers questions based on the provided research paper text.";

/// Prompt builder for the two remote operations
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the summarization user prompt
    pub fn build_summary_prompt(text: &str, target_words: usize) -> String {
        format!(
            "Summarize the following research paper text in approximately {} words:\n\n{}",
            target_words, text
        )
    }

    /// Build the question-answering user prompt
    pub fn build_qa_prompt(question: &str, context: &str) -> String {
        format!("Context: {}\n\nQuestion: {}", context, question)
    }
}

/// Truncate to at most `max_chars` characters. Positional truncation
/// only; no attempt at a word boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_carries_target_and_text() {
        let prompt = PromptBuilder::build_summary_prompt("paper body", 250);
        assert!(prompt.contains("approximately 250 words"));
        assert!(prompt.ends_with("paper body"));
    }

    #[test]
    fn test_qa_prompt_layout() {
        let prompt = PromptBuilder::build_qa_prompt("What is the finding?", "some context");
        assert_eq!(prompt, "Context: some context\n\nQuestion: What is the finding?");
    }

    #[test]
    fn test_truncate_short_input_untouched() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_cuts_at_limit() {
        assert_eq!(truncate_chars("hello world", 5), "hello");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        // 'é' is two bytes but one character; a 3000-char input is
        // already within a 4000-char budget and must pass unchanged
        let text = "é".repeat(3000);
        assert_eq!(truncate_chars(&text, 4000).chars().count(), 3000);

        let longer = "é".repeat(5000);
        let cut = truncate_chars(&longer, 4000);
        assert_eq!(cut.chars().count(), 4000);
        assert!(cut.chars().all(|c| c == 'é'));
    }
}
