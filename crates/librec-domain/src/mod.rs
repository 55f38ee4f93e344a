//! Domain layer for the librec recommendation engine
//!
//! Core business types and boundary contracts: the catalog entry entity,
//! embedding and recommendation value objects, the error taxonomy, and the
//! ports implemented by provider and infrastructure crates.

/// Domain layer constants
pub mod constants;
/// Domain entities
pub mod entities;
/// Error handling types
pub mod error;
/// Domain port interfaces
pub mod ports;
/// Domain value objects
pub mod value_objects;

// Re-export the most commonly used types at the crate root
pub use entities::CatalogEntry;
pub use error::{Error, Result};
pub use value_objects::{Embedding, Recommendation};
