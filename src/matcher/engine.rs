// file: src/matcher/engine.rs
// description: FAQ matcher mapping free-text queries to canned answers
// reference: internal matching engine

use crate::config::MatcherConfig;
use crate::matcher::similarity::cosine_similarity;
use crate::matcher::tokenizer::tokenize;
use crate::models::{FaqCatalog, ScoredEntry};
use tracing::debug;

/// Scores a query against every catalog question and resolves the reply.
///
/// The catalog is injected at construction and never mutated, so resolution
/// is a pure function of the query: same query, same catalog, same reply.
#[derive(Debug, Clone)]
pub struct FaqMatcher {
    catalog: FaqCatalog,
    threshold: f64,
    fallback: String,
}

impl FaqMatcher {
    pub fn new(catalog: FaqCatalog, config: MatcherConfig) -> Self {
        Self {
            catalog,
            threshold: config.threshold,
            fallback: config.fallback,
        }
    }

    pub fn catalog(&self) -> &FaqCatalog {
        &self.catalog
    }

    /// Score every catalog entry against the query, in catalog order.
    pub fn score_catalog(&self, query: &str) -> Vec<ScoredEntry> {
        let query_tokens = tokenize(query);

        self.catalog
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let question_tokens = tokenize(&entry.question);
                let score = cosine_similarity(&query_tokens, &question_tokens);
                ScoredEntry::new(index, entry.question.clone(), score)
            })
            .collect()
    }

    /// The first maximal entry, if any. A strict greater-than scan keeps the
    /// earliest entry on tied scores, so catalog order breaks ties.
    pub fn best_match(&self, query: &str) -> Option<ScoredEntry> {
        let mut best: Option<ScoredEntry> = None;

        for scored in self.score_catalog(query) {
            match &best {
                Some(current) if scored.score <= current.score => {}
                _ => best = Some(scored),
            }
        }

        best
    }

    /// Resolve a query to the best-matching answer, or the fallback when the
    /// best score does not exceed the threshold. Total: every input, including
    /// empty queries and an empty catalog, yields a reply.
    pub fn find_best_answer(&self, query: &str) -> String {
        match self.best_match(query) {
            Some(best) if best.score > self.threshold => {
                debug!(
                    "query matched entry {} (score {:.4}): {}",
                    best.index, best.score, best.question
                );
                self.catalog
                    .get(best.index)
                    .map(|entry| entry.answer.clone())
                    .unwrap_or_else(|| self.fallback.clone())
            }
            Some(best) => {
                debug!("best score {:.4} below threshold, using fallback", best.score);
                self.fallback.clone()
            }
            None => {
                debug!("empty catalog, using fallback");
                self.fallback.clone()
            }
        }
    }
}
