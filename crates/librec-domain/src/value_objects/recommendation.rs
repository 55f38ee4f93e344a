//! Recommendation Result Value Objects

use serde::{Deserialize, Serialize};

use crate::entities::CatalogEntry;

/// Value Object: Scored Recommendation
///
/// A single ranked result from a recommendation query: the matched
/// catalog entry together with its similarity score. Transient — produced
/// per query, never persisted.
///
/// ## Business Rules
///
/// - For semantic queries the score is a cosine similarity in [-1, 1]
/// - For keyword queries the score is a weighted keyword-hit count
/// - Higher is better in both cases
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// The recommended catalog entry
    pub entry: CatalogEntry,
    /// Relevance score, higher is better
    pub score: f32,
}

impl Recommendation {
    /// Pair an entry with its score
    pub fn new(entry: CatalogEntry, score: f32) -> Self {
        Self { entry, score }
    }
}
