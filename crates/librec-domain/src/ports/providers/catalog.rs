//! Catalog Source Port

use async_trait::async_trait;

use crate::entities::CatalogEntry;
use crate::error::Result;

/// Catalog Source Interface
///
/// Contract for collaborators that hand the engine a catalog snapshot.
/// One call, all entries; pagination is the collaborator's concern. The
/// returned order is the catalog insertion order and is what recommenders
/// use to break score ties deterministically.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every entry of the current catalog
    async fn fetch_all(&self) -> Result<Vec<CatalogEntry>>;

    /// Get the name/identifier of this source implementation
    fn source_name(&self) -> &str;
}
