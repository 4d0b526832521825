// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod faq;
pub mod match_result;
pub mod message;

pub use faq::{FaqCatalog, FaqEntry};
pub use match_result::ScoredEntry;
pub use message::{Message, Sender};
