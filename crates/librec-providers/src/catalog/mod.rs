//! Catalog Source Implementations
//!
//! Implementations of the `CatalogSource` domain port.

/// In-memory catalog source
pub mod static_source;

/// JSON file catalog source
#[cfg(feature = "catalog-json")]
pub mod json;

pub use static_source::StaticCatalogSource;

#[cfg(feature = "catalog-json")]
pub use json::JsonCatalogSource;
