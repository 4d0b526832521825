// file: src/matcher/similarity.rs
// description: bag-of-words cosine similarity between token lists
// reference: normalized dot product over per-pair term frequency vectors

/// Cosine similarity of two token multisets.
///
/// The vocabulary is the set union of both token lists, computed per pair.
/// Term frequencies over that vocabulary form two non-negative vectors, so
/// the result is always within [0.0, 1.0]. Either side having a zero norm
/// (no tokens) yields 0.0.
pub fn cosine_similarity(a: &[String], b: &[String]) -> f64 {
    let mut vocabulary: Vec<&str> = Vec::new();
    for token in a.iter().chain(b.iter()) {
        if !vocabulary.contains(&token.as_str()) {
            vocabulary.push(token.as_str());
        }
    }

    let freq = |tokens: &[String]| -> Vec<f64> {
        vocabulary
            .iter()
            .map(|word| tokens.iter().filter(|t| t.as_str() == *word).count() as f64)
            .collect()
    };

    let freq_a = freq(a);
    let freq_b = freq(b);

    let dot: f64 = freq_a.iter().zip(freq_b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = freq_a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = freq_b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::tokenizer::tokenize;

    #[test]
    fn test_identical_token_lists_score_one() {
        let tokens = tokenize("what is diabetic retinopathy");
        let score = cosine_similarity(&tokens, &tokens);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_token_lists_score_zero() {
        let a = tokenize("banana bread recipe");
        let b = tokenize("diabetic retinopathy stages");
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_empty_side_scores_zero() {
        let a: Vec<String> = vec![];
        let b = tokenize("some words here");
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&b, &a), 0.0);
        assert_eq!(cosine_similarity(&a, &a), 0.0);
    }

    #[test]
    fn test_score_bounded_by_one() {
        let a = tokenize("eye exam every year");
        let b = tokenize("how often should diabetic patients get an eye exam");
        let score = cosine_similarity(&a, &b);
        assert!(score > 0.0);
        assert!(score <= 1.0);
    }

    #[test]
    fn test_token_order_independence() {
        let base = tokenize("can ai detect diabetic retinopathy");
        let a = tokenize("detect diabetic ai retinopathy can");
        let b = tokenize("retinopathy can detect ai diabetic");
        assert_eq!(cosine_similarity(&a, &base), cosine_similarity(&b, &base));
    }

    #[test]
    fn test_repeated_tokens_weighted() {
        // Term frequency matters: repeating a shared word moves the vectors
        // apart when the other side mentions it once.
        let single = tokenize("eye exam");
        let repeated = tokenize("eye eye eye exam");
        let score_single = cosine_similarity(&single, &single);
        let score_repeated = cosine_similarity(&repeated, &single);
        assert!(score_repeated < score_single);
    }
}
