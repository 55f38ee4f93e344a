//! Application Service Port Interfaces
//!
//! Defines the contract between the recommendation use cases and the
//! request-handling layer that consumes them.

use async_trait::async_trait;

use librec_domain::constants::DEFAULT_RECOMMENDATION_LIMIT;
use librec_domain::error::Result;
use librec_domain::value_objects::Recommendation;

// ============================================================================
// Recommender Interface
// ============================================================================

/// Recommender Interface
///
/// Common contract for every recommendation strategy. The serving layer
/// depends on this trait only, so an index with a different ranking
/// backend (keyword, cosine scan, ANN) can be swapped in without touching
/// callers.
#[async_trait]
pub trait RecommenderInterface: Send + Sync {
    /// Return up to `limit` recommendations for the prompt, best first.
    ///
    /// `limit == 0` yields an empty result, not an error. An index that
    /// has not finished its first build fails with `Error::NotReady`.
    async fn recommend(&self, prompt: &str, limit: usize) -> Result<Vec<Recommendation>>;

    /// Recommend with the engine-wide default result limit
    async fn recommend_default(&self, prompt: &str) -> Result<Vec<Recommendation>> {
        self.recommend(prompt, DEFAULT_RECOMMENDATION_LIMIT).await
    }

    /// Current lifecycle state of the recommender
    fn status(&self) -> IndexStatus;
}

// ============================================================================
// Index Lifecycle
// ============================================================================

/// Lifecycle state of a recommendation index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    /// No snapshot has been loaded yet
    Empty,
    /// A build is in progress; a previous snapshot may still be serving
    Building,
    /// A snapshot is loaded and serving queries
    Ready,
}

/// Current status of a recommendation index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexStatus {
    /// Lifecycle state
    pub state: IndexState,
    /// Number of entries in the serving snapshot
    pub entries: usize,
    /// Embedding dimensionality of the serving snapshot, if any
    pub dimensions: Option<usize>,
}

impl IndexStatus {
    /// Status for a recommender with no index lifecycle (always serving)
    pub fn always_ready() -> Self {
        Self {
            state: IndexState::Ready,
            entries: 0,
            dimensions: None,
        }
    }
}
