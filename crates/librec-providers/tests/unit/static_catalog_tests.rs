//! Tests for the in-memory catalog source

use librec_domain::CatalogEntry;
use librec_domain::ports::providers::CatalogSource;
use librec_providers::catalog::StaticCatalogSource;

#[tokio::test]
async fn test_serves_entries_in_insertion_order() {
    let source = StaticCatalogSource::new(vec![
        CatalogEntry::new(2, "Foundation", "Isaac Asimov"),
        CatalogEntry::new(1, "Dune", "Frank Herbert"),
    ]);

    let entries = source.fetch_all().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, 2);
    assert_eq!(entries[1].id, 1);
}

#[tokio::test]
async fn test_empty_source_is_valid() {
    let source = StaticCatalogSource::new(Vec::new());

    assert!(source.is_empty());
    assert!(source.fetch_all().await.unwrap().is_empty());
}
