// file: src/matcher/mod.rs
// description: similarity matcher module exports
// reference: internal module structure

pub mod engine;
pub mod similarity;
pub mod tokenizer;

pub use engine::FaqMatcher;
pub use similarity::cosine_similarity;
pub use tokenizer::tokenize;
