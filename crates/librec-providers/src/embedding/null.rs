//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use async_trait::async_trait;

use librec_domain::error::Result;
use librec_domain::ports::providers::EmbeddingProvider;
use librec_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_NULL;

/// Null embedding provider for testing
///
/// Returns fixed-size unit vectors derived from a hash of the input text.
/// The same text always yields the same vector regardless of batch
/// position, so ranking results are reproducible across builds. Useful
/// for unit tests and development without an actual embedding service.
#[derive(Debug)]
pub struct NullEmbeddingProvider;

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        "null"
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let embeddings = texts
            .iter()
            .map(|text| {
                // Deterministic per-text seed
                let hash = text.chars().map(|c| c as u32).sum::<u32>();
                let base_value = (hash % 1000) as f32 / 1000.0;

                let vector: Vec<f32> = (0..EMBEDDING_DIMENSION_NULL)
                    .map(|j| {
                        // Vary values by hash and position so different
                        // texts point in different directions
                        let variation = (hash as f32 * 0.001 + j as f32 * 0.01).sin();
                        base_value + variation * 0.1
                    })
                    .collect();

                Embedding::normalized(vector, "null-test")
            })
            .collect();

        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_NULL
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
