//! Purpose-built embedding providers for exercising failure paths
//!
//! The happy path is covered with the real `NullEmbeddingProvider`; these
//! exist only to provoke behaviors a healthy provider never shows.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use librec_domain::error::{Error, Result};
use librec_domain::ports::providers::EmbeddingProvider;
use librec_domain::value_objects::Embedding;

/// Returns the same unit vector for every text, so every entry ties
#[derive(Debug)]
pub struct ConstantEmbeddingProvider;

#[async_trait]
impl EmbeddingProvider for ConstantEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|_| Embedding::normalized(vec![1.0, 1.0, 1.0, 1.0], "constant"))
            .collect())
    }

    fn dimensions(&self) -> usize {
        4
    }

    fn provider_name(&self) -> &str {
        "constant"
    }
}

/// Fails whole batches that contain a poison marker, and single texts
/// carrying it, so builds must isolate the bad entry
#[derive(Debug)]
pub struct PoisonedEmbeddingProvider {
    pub poison: &'static str,
}

#[async_trait]
impl EmbeddingProvider for PoisonedEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.iter().any(|t| t.contains(self.poison)) {
            return Err(Error::embedding("poisoned batch"));
        }
        Ok(texts
            .iter()
            .map(|t| hash_embedding(t))
            .collect())
    }

    fn dimensions(&self) -> usize {
        8
    }

    fn provider_name(&self) -> &str {
        "poisoned"
    }
}

/// Flips between working and failing so rebuild failure can be provoked
/// after a successful first build
#[derive(Debug)]
pub struct ToggleEmbeddingProvider {
    failing: AtomicBool,
}

impl ToggleEmbeddingProvider {
    pub fn new() -> Self {
        Self {
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmbeddingProvider for ToggleEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::embedding("provider offline"));
        }
        Ok(texts.iter().map(|t| hash_embedding(t)).collect())
    }

    fn dimensions(&self) -> usize {
        8
    }

    fn provider_name(&self) -> &str {
        "toggle"
    }
}

/// Deterministic 8-dimensional unit vector derived from the text
pub fn hash_embedding(text: &str) -> Embedding {
    let hash = text.chars().map(|c| c as u32).sum::<u32>();
    let vector: Vec<f32> = (0..8)
        .map(|j| ((hash as f32) * 0.013 + (j as f32) * 0.7).sin())
        .collect();
    Embedding::normalized(vector, "hash")
}
