//! Tests for the deterministic null embedding provider

use librec_domain::ports::providers::EmbeddingProvider;
use librec_providers::embedding::NullEmbeddingProvider;

#[tokio::test]
async fn test_constant_dimensions_across_calls() {
    let provider = NullEmbeddingProvider::new();

    let a = provider.embed("space opera").await.unwrap();
    let b = provider.embed("court intrigue").await.unwrap();
    let c = provider.embed("").await.unwrap();

    assert_eq!(a.dimensions, provider.dimensions());
    assert_eq!(b.dimensions, provider.dimensions());
    assert_eq!(c.dimensions, provider.dimensions());
}

#[tokio::test]
async fn test_output_is_unit_norm() {
    let provider = NullEmbeddingProvider::new();

    for text in ["Dune", "Foundation", "", "a much longer query about starships"] {
        let embedding = provider.embed(text).await.unwrap();
        assert!(
            (embedding.l2_norm() - 1.0).abs() < 1e-5,
            "norm for {text:?} was {}",
            embedding.l2_norm()
        );
    }
}

#[tokio::test]
async fn test_same_text_same_vector_regardless_of_batch_position() {
    let provider = NullEmbeddingProvider::new();

    let single = provider.embed("Dune").await.unwrap();
    let batch = provider
        .embed_batch(&["Foundation".to_string(), "Dune".to_string()])
        .await
        .unwrap();

    assert_eq!(single.vector, batch[1].vector);
}

#[tokio::test]
async fn test_different_texts_differ() {
    let provider = NullEmbeddingProvider::new();

    let a = provider.embed("Dune by Frank Herbert").await.unwrap();
    let b = provider.embed("Foundation by Isaac Asimov").await.unwrap();

    assert_ne!(a.vector, b.vector);
}

#[tokio::test]
async fn test_empty_text_does_not_fail() {
    let provider = NullEmbeddingProvider::new();

    let embedding = provider.embed("").await.unwrap();
    assert_eq!(embedding.dimensions, provider.dimensions());
    assert!((embedding.l2_norm() - 1.0).abs() < 1e-5);
}

#[tokio::test]
async fn test_empty_batch_returns_empty() {
    let provider = NullEmbeddingProvider::new();

    let embeddings = provider.embed_batch(&[]).await.unwrap();
    assert!(embeddings.is_empty());
}
