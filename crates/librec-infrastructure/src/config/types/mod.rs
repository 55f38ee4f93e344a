//! Configuration types
//!
//! One struct per concern, assembled into [`AppConfig`].

/// Main application configuration
pub mod app;
/// Logging configuration types
pub mod logging;

pub use app::{AppConfig, IndexConfig};
pub use logging::LoggingConfig;
