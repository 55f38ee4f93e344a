//! Infrastructure layer for the librec recommendation engine
//!
//! External concerns around the domain and application layers:
//! configuration loading and validation, logging bootstrap, and the
//! factories that turn configuration into concrete providers and a wired
//! recommender.

/// Composition root
pub mod bootstrap;
/// Configuration loading and types
pub mod config;
/// Infrastructure constants
pub mod constants;
/// Error context extension utilities
pub mod error_ext;
/// Provider factories
pub mod factory;
/// Structured logging setup
pub mod logging;

pub use bootstrap::init_semantic_recommender;
pub use config::{AppConfig, ConfigLoader};
pub use factory::{CatalogSourceFactory, EmbeddingProviderFactory};
