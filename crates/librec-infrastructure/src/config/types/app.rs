//! Main application configuration

use serde::{Deserialize, Serialize};

use librec_domain::constants::DEFAULT_RECOMMENDATION_LIMIT;
use librec_domain::value_objects::{CatalogSourceConfig, EmbeddingConfig};

use super::logging::LoggingConfig;

/// Recommendation index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Result limit used when the caller does not pass one
    pub default_limit: usize,

    /// Build the index in a background task at startup
    pub build_on_startup: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_RECOMMENDATION_LIMIT,
            build_on_startup: true,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Embedding provider configuration
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Catalog source configuration
    #[serde(default)]
    pub catalog: CatalogSourceConfig,

    /// Recommendation index configuration
    #[serde(default)]
    pub index: IndexConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
