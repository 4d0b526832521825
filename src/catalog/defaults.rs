// file: src/catalog/defaults.rs
// description: built-in diabetic retinopathy FAQ catalog
// reference: product FAQ content

use crate::models::{FaqCatalog, FaqEntry};

/// The catalog shipped with the assistant. Entry order matters: score ties
/// resolve to the earliest entry.
pub fn builtin_catalog() -> FaqCatalog {
    FaqCatalog::new(vec![
        FaqEntry::new(
            "What is Diabetic Retinopathy?",
            "Diabetic Retinopathy is a diabetes-related eye disease caused by damage to the \
             small blood vessels in the retina. Over time, high blood sugar weakens these \
             vessels, leading to leakage or abnormal growth that can impair vision.",
        ),
        FaqEntry::new(
            "Who is at risk of developing DR?",
            "Individuals with Type 1 or Type 2 diabetes, especially those with poor blood \
             sugar control, high blood pressure, or long-standing diabetes, are at high risk.",
        ),
        FaqEntry::new(
            "Can diabetic retinopathy cause blindness?",
            "Yes. Without timely diagnosis and treatment, DR can progress to proliferative \
             stages that cause severe vision loss or blindness.",
        ),
        FaqEntry::new(
            "What are the stages of DR?",
            "Mild NPDR, Moderate NPDR, Severe NPDR, and Proliferative DR (advanced stage with \
             new vessel growth).",
        ),
        FaqEntry::new(
            "What lifestyle changes help prevent DR?",
            "Maintain HbA1c below 7%, control blood pressure, stop smoking, exercise \
             regularly, and eat a balanced diet.",
        ),
        FaqEntry::new(
            "What is Diabetic Macular Edema?",
            "DME is swelling of the macula due to fluid leakage, causing central vision loss. \
             It can occur at any DR stage.",
        ),
        FaqEntry::new(
            "How often should diabetic patients get an eye exam?",
            "Every 6 to 12 months. Early detection via annual dilated retinal exams helps \
             prevent vision loss.",
        ),
        FaqEntry::new(
            "Can AI detect diabetic retinopathy?",
            "Yes, AI models like CNNs analyze fundus images to detect lesions and grade DR \
             severity automatically.",
        ),
        FaqEntry::new(
            "Which datasets are used for AI training?",
            "Messidor, EyePACS, IDRiD, and APTOS 2019 are commonly used datasets for DR \
             detection.",
        ),
        FaqEntry::new(
            "Can AI replace ophthalmologists?",
            "No. AI assists in screening and triage, but clinical decisions remain with \
             ophthalmologists.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 10);
        assert!(catalog
            .iter()
            .all(|entry| !entry.question.trim().is_empty() && !entry.answer.trim().is_empty()));
    }

    #[test]
    fn test_builtin_catalog_first_entry() {
        let catalog = builtin_catalog();
        assert_eq!(
            catalog.get(0).unwrap().question,
            "What is Diabetic Retinopathy?"
        );
    }
}
