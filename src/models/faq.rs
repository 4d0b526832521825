// file: src/models/faq.rs
// description: FAQ entry and catalog models
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// An immutable question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A fixed, ordered list of FAQ entries. Loaded once, never mutated; order is
/// significant because ties between match scores are broken by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqCatalog {
    pub entries: Vec<FaqEntry>,
}

impl FaqCatalog {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self { entries: vec![] }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FaqEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = FaqCatalog::new(vec![
            FaqEntry::new("first question", "first answer"),
            FaqEntry::new("second question", "second answer"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().answer, "first answer");
        assert_eq!(catalog.get(1).unwrap().question, "second question");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = FaqCatalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.get(0).is_none());
    }
}
