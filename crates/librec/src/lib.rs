//! # librec
//!
//! A semantic recommendation engine for library catalogs: one precomputed
//! embedding per catalog entry, cosine-similarity ranking per query, and a
//! keyword fallback for deployments without an embedding model.
//!
//! This crate is the public facade. It re-exports the layers and will
//! usually be the only librec dependency a serving layer needs.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use librec::application::use_cases::SemanticRecommender;
//! use librec::application::RecommenderInterface;
//! use librec::domain::CatalogEntry;
//! use librec::providers::embedding::NullEmbeddingProvider;
//!
//! # async fn example() -> librec::domain::error::Result<()> {
//! let index = SemanticRecommender::new(Arc::new(NullEmbeddingProvider::new()));
//! index
//!     .build(vec![
//!         CatalogEntry::new(1, "Dune", "Frank Herbert"),
//!         CatalogEntry::new(2, "Foundation", "Isaac Asimov"),
//!     ])
//!     .await?;
//!
//! let picks = index.recommend("space empire", 5).await?;
//! for pick in picks {
//!     println!("{} ({:.3})", pick.entry.title, pick.score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The workspace follows a layered layout:
//!
//! - `domain` - entities, value objects, errors, port traits
//! - `application` - recommendation use cases (semantic index, keyword)
//! - `providers` - embedding providers and catalog sources
//! - `infrastructure` - configuration, logging, provider wiring

/// Domain layer - core business logic and types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use librec_domain::*;
}

/// Application layer - recommendation use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use librec_application::*;
}

/// Provider layer - embedding providers and catalog sources
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use librec_providers::*;
}

/// Infrastructure layer - configuration, logging, and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use librec_infrastructure::*;
}

// The types almost every consumer touches
pub use librec_application::{
    IndexState, IndexStatus, KeywordRecommender, RecommenderInterface, SemanticRecommender,
};
pub use librec_domain::{CatalogEntry, Embedding, Error, Recommendation, Result};
