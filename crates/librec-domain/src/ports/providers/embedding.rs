//! Embedding Provider Port

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Text Embedding Provider Interface
///
/// Contract for services that transform free text into L2-normalized,
/// fixed-length semantic vectors — a hosted API, a local ONNX model, or a
/// deterministic stand-in for tests.
///
/// ## Guarantees
///
/// - Output length equals [`EmbeddingProvider::dimensions`] for every call
///   on a given instance.
/// - Output is unit L2 norm, so cosine similarity between two embeddings
///   is their dot product.
/// - Empty text is accepted and yields a valid, low-information vector.
/// - A provider whose model has not finished loading fails with
///   [`Error::NotReady`] rather than returning zero vectors, so callers
///   can tell "no matches" apart from "still warming up".
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item; providers
/// only implement `embed_batch()` unless a single-item fast path exists.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + std::fmt::Debug {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("no embedding returned"))
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}
