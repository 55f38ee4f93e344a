//! Semantic Embedding Value Objects
//!
//! Value objects representing semantic embeddings for similarity ranking.

use serde::{Deserialize, Serialize};

use crate::constants::EMBEDDING_NORM_EPSILON;

/// Value Object: Semantic Text Embedding
///
/// A fixed-length vector embedding of text content. Vectors are
/// L2-normalized at construction so that cosine similarity between two
/// embeddings reduces to a plain dot product. Never mutated after
/// creation; the index rebuilds embeddings wholesale with each snapshot.
///
/// ## Business Rules
///
/// - `dimensions` always equals `vector.len()`
/// - `vector` has unit L2 norm (degenerate inputs fall back to the
///   uniform unit vector, see [`Embedding::normalized`])
/// - `model` identifies the generation method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Build an embedding from a raw provider vector, normalizing it to
    /// unit L2 norm.
    ///
    /// A vector whose norm is (near) zero carries no direction — empty
    /// text through some models, or an all-zero API response. Those fall
    /// back to the uniform unit vector `[1/sqrt(d); d]`, which is a valid
    /// but low-information embedding rather than a NaN factory.
    pub fn normalized(mut vector: Vec<f32>, model: impl Into<String>) -> Self {
        let norm = l2_norm(&vector);
        if norm > EMBEDDING_NORM_EPSILON {
            for value in &mut vector {
                *value /= norm;
            }
        } else {
            let uniform = 1.0 / (vector.len().max(1) as f32).sqrt();
            vector.fill(uniform);
        }
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// L2 norm of the stored vector
    pub fn l2_norm(&self) -> f32 {
        l2_norm(&self.vector)
    }

    /// Dot product against another embedding.
    ///
    /// Both sides are unit-norm, so this is their cosine similarity.
    /// Extra components on the longer side are ignored; the index guards
    /// dimensions at build time.
    pub fn dot(&self, other: &Self) -> f32 {
        dot(&self.vector, &other.vector)
    }
}

/// Compute the L2 norm of a vector
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Dot product of two vectors, truncated to the shorter length
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
