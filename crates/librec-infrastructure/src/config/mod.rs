//! Configuration
//!
//! Application configuration types and the figment-backed loader.

/// Configuration loader
pub mod loader;
/// Configuration types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, IndexConfig, LoggingConfig};
