//! Application state for the web service

use std::sync::Arc;

use kolam_config::WebConfig;
use kolam_core::PatternCatalog;

/// Shared, read-only handler state
pub struct AppState {
    pub catalog: Arc<PatternCatalog>,
    pub config: WebConfig,
}

impl AppState {
    pub fn new(catalog: PatternCatalog, config: WebConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
        }
    }

    /// Build state from config, loading the substitute catalog if one is set
    pub fn from_config(config: WebConfig) -> kolam_core::Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let catalog = PatternCatalog::load(path)?;
                tracing::info!(path = %path.display(), patterns = catalog.len(), "loaded pattern catalog");
                catalog
            }
            None => PatternCatalog::builtin(),
        };
        Ok(Self::new(catalog, config))
    }
}
