//! Provider Factories
//!
//! Factories for creating embedding providers and catalog sources based
//! on configuration. All provider implementations come from the
//! `librec-providers` crate; this module only handles wiring.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use librec_domain::error::{Error, Result};
use librec_domain::ports::providers::{CatalogSource, EmbeddingProvider};
use librec_domain::value_objects::{CatalogSourceConfig, EmbeddingConfig};

use librec_providers::catalog::{JsonCatalogSource, StaticCatalogSource};
#[cfg(feature = "embedding-fastembed")]
use librec_providers::embedding::FastEmbedProvider;
use librec_providers::embedding::{
    GeminiEmbeddingProvider, NullEmbeddingProvider, OllamaEmbeddingProvider,
};

use crate::constants::OLLAMA_DEFAULT_PORT;

/// Known embedding provider names
pub mod embedding_providers {
    pub const OLLAMA: &str = "ollama";
    pub const GEMINI: &str = "gemini";
    pub const FASTEMBED: &str = "fastembed";
    pub const NULL: &str = "null";
}

/// Known catalog source names
pub mod catalog_sources {
    pub const JSON: &str = "json";
    pub const STATIC: &str = "static";
}

/// Factory for creating embedding providers
pub struct EmbeddingProviderFactory;

impl EmbeddingProviderFactory {
    /// Create an embedding provider based on configuration
    ///
    /// The `http_client` parameter is optional. If not provided, a default
    /// client will be created for providers that need HTTP access.
    pub fn create(
        config: &EmbeddingConfig,
        http_client: Option<Client>,
    ) -> Result<Arc<dyn EmbeddingProvider>> {
        let provider_name = config.provider.to_lowercase();

        match provider_name.as_str() {
            embedding_providers::NULL => Ok(Arc::new(NullEmbeddingProvider::new())),
            embedding_providers::OLLAMA => Self::create_ollama(config, http_client),
            embedding_providers::GEMINI => Self::create_gemini(config, http_client),
            embedding_providers::FASTEMBED => Self::create_fastembed(),
            _ => Err(Error::configuration(format!(
                "Unknown embedding provider: {}",
                config.provider
            ))),
        }
    }

    fn create_ollama(
        config: &EmbeddingConfig,
        http_client: Option<Client>,
    ) -> Result<Arc<dyn EmbeddingProvider>> {
        let client = Self::require_http_client(http_client, config)?;
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", OLLAMA_DEFAULT_PORT));
        Ok(Arc::new(OllamaEmbeddingProvider::new(
            base_url,
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
            client,
        )))
    }

    fn create_gemini(
        config: &EmbeddingConfig,
        http_client: Option<Client>,
    ) -> Result<Arc<dyn EmbeddingProvider>> {
        let client = Self::require_http_client(http_client, config)?;
        let api_key = Self::require_api_key(config, "Gemini")?;
        Ok(Arc::new(GeminiEmbeddingProvider::new(
            api_key,
            config.base_url.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
            client,
        )))
    }

    #[cfg(feature = "embedding-fastembed")]
    fn create_fastembed() -> Result<Arc<dyn EmbeddingProvider>> {
        Ok(Arc::new(FastEmbedProvider::new()?))
    }

    #[cfg(not(feature = "embedding-fastembed"))]
    fn create_fastembed() -> Result<Arc<dyn EmbeddingProvider>> {
        Err(Error::configuration(
            "fastembed provider requested but the embedding-fastembed feature is not enabled",
        ))
    }

    /// Create a default null provider (for testing/development)
    pub fn create_null() -> Arc<dyn EmbeddingProvider> {
        Arc::new(NullEmbeddingProvider::new())
    }

    fn require_http_client(client: Option<Client>, config: &EmbeddingConfig) -> Result<Client> {
        match client {
            Some(client) => Ok(client),
            None => Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .map_err(|e| {
                    Error::configuration_with_source("Failed to create HTTP client", e)
                }),
        }
    }

    fn require_api_key(config: &EmbeddingConfig, provider: &str) -> Result<String> {
        config.api_key.clone().ok_or_else(|| {
            Error::configuration(format!("API key required for {} provider", provider))
        })
    }
}

/// Factory for creating catalog sources
pub struct CatalogSourceFactory;

impl CatalogSourceFactory {
    /// Create a catalog source based on configuration
    pub fn create(config: &CatalogSourceConfig) -> Result<Arc<dyn CatalogSource>> {
        let source_name = config.source.to_lowercase();

        match source_name.as_str() {
            catalog_sources::JSON => {
                let path = config.path.clone().ok_or_else(|| {
                    Error::configuration("JSON catalog source requires a path")
                })?;
                Ok(Arc::new(JsonCatalogSource::new(path)))
            }

            // An empty static source: entries are handed over by the caller
            catalog_sources::STATIC => Ok(Arc::new(StaticCatalogSource::new(Vec::new()))),

            _ => Err(Error::configuration(format!(
                "Unknown catalog source: {}",
                config.source
            ))),
        }
    }
}
