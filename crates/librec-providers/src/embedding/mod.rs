//! Embedding Provider Implementations
//!
//! Implementations of the `EmbeddingProvider` domain port. All providers
//! L2-normalize their output at construction time so the index can rank
//! by plain dot product.

/// Common helpers for embedding providers
pub mod helpers;
/// Deterministic test provider
pub mod null;

/// Local ONNX inference provider
#[cfg(feature = "embedding-fastembed")]
pub mod fastembed;
/// Google Gemini embedding API provider
#[cfg(feature = "embedding-gemini")]
pub mod gemini;
/// Ollama local embedding API provider
#[cfg(feature = "embedding-ollama")]
pub mod ollama;

pub use null::NullEmbeddingProvider;

#[cfg(feature = "embedding-fastembed")]
pub use fastembed::FastEmbedProvider;
#[cfg(feature = "embedding-gemini")]
pub use gemini::GeminiEmbeddingProvider;
#[cfg(feature = "embedding-ollama")]
pub use ollama::OllamaEmbeddingProvider;
