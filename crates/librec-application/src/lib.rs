//! Application layer for the librec recommendation engine
//!
//! Use cases orchestrating the domain ports: the semantic recommendation
//! index (embedding-based cosine ranking with an atomically swapped
//! snapshot) and the keyword recommender (weighted substring matching).

/// Application service port interfaces
pub mod ports;
/// Use case implementations
pub mod use_cases;

pub use ports::services::{IndexState, IndexStatus, RecommenderInterface};
pub use use_cases::{BuildReport, KeywordRecommender, SemanticRecommender};
