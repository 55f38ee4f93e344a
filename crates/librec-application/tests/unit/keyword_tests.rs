//! Tests for the keyword recommender

use std::sync::Arc;

use librec_application::ports::services::{IndexState, RecommenderInterface};
use librec_application::use_cases::KeywordRecommender;
use librec_domain::CatalogEntry;
use librec_providers::catalog::StaticCatalogSource;

fn recommender(entries: Vec<CatalogEntry>) -> KeywordRecommender {
    KeywordRecommender::new(Arc::new(StaticCatalogSource::new(entries)))
}

fn sample_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(1, "Dune", "Frank Herbert"),
        CatalogEntry::new(2, "Dune Messiah", "Frank Herbert"),
        CatalogEntry::new(3, "Foundation", "Isaac Asimov"),
        CatalogEntry::new(4, "The Herbert Reader", "Various"),
    ]
}

#[tokio::test]
async fn test_title_hits_outweigh_author_hits() {
    let results = recommender(sample_catalog())
        .recommend("dune", 10)
        .await
        .unwrap();

    // Both Dune titles match in the title (score 2), nothing else matches
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].entry.id, 1);
    assert_eq!(results[1].entry.id, 2);
    assert!((results[0].score - 2.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_title_and_author_hits_accumulate() {
    let results = recommender(sample_catalog())
        .recommend("herbert", 10)
        .await
        .unwrap();

    // "The Herbert Reader" hits in the title, the Dune books in authors
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].entry.id, 4);
    assert!((results[0].score - 2.0).abs() < 1e-6);
    assert!((results[1].score - 1.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_matching_is_case_insensitive() {
    let results = recommender(sample_catalog())
        .recommend("FOUNDATION", 10)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.id, 3);
}

#[tokio::test]
async fn test_short_words_carry_no_signal() {
    // Every word is <= 2 chars, so there is nothing to match on
    let results = recommender(sample_catalog())
        .recommend("a an of to", 10)
        .await
        .unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_no_hits_yields_empty_not_error() {
    let results = recommender(sample_catalog())
        .recommend("quantum gastronomy", 10)
        .await
        .unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_limit_zero_and_limit_truncation() {
    let rec = recommender(sample_catalog());

    assert!(rec.recommend("herbert", 0).await.unwrap().is_empty());
    assert_eq!(rec.recommend("herbert", 1).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_equal_scores_keep_catalog_order() {
    let results = recommender(sample_catalog())
        .recommend("frank", 10)
        .await
        .unwrap();

    // Both Dune books score 1.0 via authors; catalog order decides
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].entry.id, 1);
    assert_eq!(results[1].entry.id, 2);
}

#[tokio::test]
async fn test_keyword_recommender_is_always_ready() {
    let rec = recommender(Vec::new());

    assert_eq!(rec.status().state, IndexState::Ready);
    assert!(rec.recommend("anything", 5).await.unwrap().is_empty());
}
