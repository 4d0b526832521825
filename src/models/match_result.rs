// file: src/models/match_result.rs
// description: scored match results produced by the similarity matcher
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// A catalog entry paired with its similarity score against a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredEntry {
    /// Position of the entry in the catalog.
    pub index: usize,

    /// Catalog question text.
    pub question: String,

    /// Cosine similarity in [0.0, 1.0]; higher is more similar.
    pub score: f64,
}

impl ScoredEntry {
    pub fn new(index: usize, question: impl Into<String>, score: f64) -> Self {
        Self {
            index,
            question: question.into(),
            score,
        }
    }

    /// Format as a one-line summary for display.
    pub fn format_summary(&self, max_question_len: usize) -> String {
        let question = if self.question.len() > max_question_len {
            format!("{}...", &self.question[..max_question_len])
        } else {
            self.question.clone()
        };

        format!("Score: {:.4} | {}", self.score, question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_entry_creation() {
        let entry = ScoredEntry::new(3, "What is DR?", 0.87);
        assert_eq!(entry.index, 3);
        assert_eq!(entry.score, 0.87);
    }

    #[test]
    fn test_format_summary_truncates() {
        let entry = ScoredEntry::new(0, "A very long catalog question indeed", 0.5);
        let summary = entry.format_summary(10);
        assert!(summary.contains("0.5000"));
        assert!(summary.contains("..."));
    }
}
