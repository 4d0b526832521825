// file: src/catalog/mod.rs
// description: catalog module exports
// reference: internal module structure

pub mod defaults;
pub mod loader;

pub use defaults::builtin_catalog;
pub use loader::CatalogLoader;
