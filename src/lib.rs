// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod exporter;
pub mod matcher;
pub mod models;
pub mod utils;

pub use catalog::{CatalogLoader, builtin_catalog};
pub use chat::ChatSession;
pub use config::{ChatConfig, Config, MatcherConfig};
pub use error::{AssistantError, Result};
pub use exporter::{ExportedTranscript, TranscriptExporter};
pub use matcher::{FaqMatcher, cosine_similarity, tokenize};
pub use models::{FaqCatalog, FaqEntry, Message, ScoredEntry, Sender};
pub use utils::Validator;
