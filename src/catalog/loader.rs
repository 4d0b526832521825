// file: src/catalog/loader.rs
// description: FAQ catalog loading from toml files
// reference: https://docs.rs/config

use crate::error::{AssistantError, Result};
use crate::models::FaqCatalog;
use crate::utils::Validator;
use std::path::Path;
use tracing::info;

pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a TOML file of `[[entries]]` tables. The loaded
    /// catalog is validated before use: it must be non-empty and free of
    /// blank questions or answers.
    pub fn load(path: &Path) -> Result<FaqCatalog> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .map_err(|e| AssistantError::CatalogLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let catalog: FaqCatalog =
            settings
                .try_deserialize()
                .map_err(|e| AssistantError::CatalogLoad {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;

        Validator::validate_catalog(&catalog)?;

        info!("Loaded {} FAQ entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }
}
