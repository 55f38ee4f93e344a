//! Application Port Interfaces
//!
//! Contracts the application layer exposes to the serving layer. Provider
//! ports consumed by the use cases live in `librec-domain::ports`.

/// Recommendation service interfaces
pub mod services;

pub use services::{IndexState, IndexStatus, RecommenderInterface};
