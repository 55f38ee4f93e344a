//! Configuration Value Objects
//!
//! Provider-facing configuration carried from the infrastructure layer to
//! the provider factories. Kept in the domain so factories and loaders
//! share one definition.

use serde::{Deserialize, Serialize};

use crate::constants::EMBEDDING_BATCH_SIZE;

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Provider name ("ollama", "gemini", "fastembed", "null")
    pub provider: String,
    /// Model name, provider-specific
    pub model: String,
    /// API key for hosted providers
    pub api_key: Option<String>,
    /// Base URL override for hosted providers
    pub base_url: Option<String>,
    /// Batch size used during index builds
    pub batch_size: usize,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "null".to_string(),
            model: "all-minilm".to_string(),
            api_key: None,
            base_url: None,
            batch_size: EMBEDDING_BATCH_SIZE,
            timeout_secs: 30,
        }
    }
}

/// Catalog source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSourceConfig {
    /// Source name ("json", "static")
    pub source: String,
    /// Path to the catalog file for file-backed sources
    pub path: Option<std::path::PathBuf>,
}

impl Default for CatalogSourceConfig {
    fn default() -> Self {
        Self {
            source: "static".to_string(),
            path: None,
        }
    }
}
