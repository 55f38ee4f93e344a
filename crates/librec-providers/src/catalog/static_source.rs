//! In-memory catalog source
//!
//! Serves a fixed list of entries. Useful for tests, demos and
//! deployments whose catalog is compiled in or assembled by the caller.

use async_trait::async_trait;

use librec_domain::entities::CatalogEntry;
use librec_domain::error::Result;
use librec_domain::ports::providers::CatalogSource;

/// Catalog source backed by an in-memory entry list
pub struct StaticCatalogSource {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalogSource {
    /// Create a source serving the given entries in the given order
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries served
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the source has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<CatalogEntry>> {
        Ok(self.entries.clone())
    }

    fn source_name(&self) -> &str {
        "static"
    }
}
