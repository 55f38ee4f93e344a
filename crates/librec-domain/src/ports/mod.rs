//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and external layers.
//! Ports follow the Dependency Inversion Principle: the domain defines the
//! interfaces, provider and infrastructure crates implement them.

/// External service provider ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use providers::{CatalogSource, EmbeddingProvider};
