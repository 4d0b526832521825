// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{AssistantError, Result};
use crate::models::FaqCatalog;

pub struct Validator;

impl Validator {
    pub fn validate_catalog(catalog: &FaqCatalog) -> Result<()> {
        if catalog.is_empty() {
            return Err(AssistantError::Validation(
                "Catalog must contain at least one entry".to_string(),
            ));
        }

        for (index, entry) in catalog.iter().enumerate() {
            if entry.question.trim().is_empty() {
                return Err(AssistantError::Validation(format!(
                    "Catalog entry {} has an empty question",
                    index
                )));
            }
            if entry.answer.trim().is_empty() {
                return Err(AssistantError::Validation(format!(
                    "Catalog entry {} has an empty answer",
                    index
                )));
            }
        }

        Ok(())
    }

    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.len() <= max_length {
            text.to_string()
        } else {
            format!("{}...", &text[..max_length])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FaqEntry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_catalog() {
        let valid = FaqCatalog::new(vec![FaqEntry::new("Q?", "A.")]);
        assert!(Validator::validate_catalog(&valid).is_ok());

        assert!(Validator::validate_catalog(&FaqCatalog::empty()).is_err());

        let blank_question = FaqCatalog::new(vec![FaqEntry::new("  ", "A.")]);
        assert!(Validator::validate_catalog(&blank_question).is_err());

        let blank_answer = FaqCatalog::new(vec![FaqEntry::new("Q?", "")]);
        assert!(Validator::validate_catalog(&blank_answer).is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
    }
}
