// file: src/chat/mod.rs
// description: chat session module exports
// reference: internal module structure

pub mod session;

pub use session::ChatSession;
