//! Tests for the provider factories

use librec_domain::value_objects::{CatalogSourceConfig, EmbeddingConfig};
use librec_infrastructure::{CatalogSourceFactory, EmbeddingProviderFactory};

#[test]
fn test_null_provider_needs_no_extras() {
    let config = EmbeddingConfig {
        provider: "null".to_string(),
        ..EmbeddingConfig::default()
    };

    let provider = EmbeddingProviderFactory::create(&config, None).unwrap();
    assert_eq!(provider.provider_name(), "null");
    assert_eq!(provider.dimensions(), 384);
}

#[test]
fn test_provider_name_matching_is_case_insensitive() {
    let config = EmbeddingConfig {
        provider: "NULL".to_string(),
        ..EmbeddingConfig::default()
    };

    assert!(EmbeddingProviderFactory::create(&config, None).is_ok());
}

#[test]
fn test_unknown_provider_is_a_configuration_error() {
    let config = EmbeddingConfig {
        provider: "telepathy".to_string(),
        ..EmbeddingConfig::default()
    };

    let error = EmbeddingProviderFactory::create(&config, None).unwrap_err();
    assert!(matches!(
        error,
        librec_domain::Error::Configuration { .. }
    ));
}

#[test]
fn test_ollama_provider_defaults_base_url() {
    let config = EmbeddingConfig {
        provider: "ollama".to_string(),
        model: "all-minilm".to_string(),
        ..EmbeddingConfig::default()
    };

    let provider = EmbeddingProviderFactory::create(&config, None).unwrap();
    assert_eq!(provider.provider_name(), "ollama");
    assert_eq!(provider.dimensions(), 384);
}

#[test]
fn test_gemini_provider_requires_api_key() {
    let config = EmbeddingConfig {
        provider: "gemini".to_string(),
        model: "text-embedding-004".to_string(),
        api_key: None,
        ..EmbeddingConfig::default()
    };

    assert!(EmbeddingProviderFactory::create(&config, None).is_err());

    let with_key = EmbeddingConfig {
        api_key: Some("AIza-test-key".to_string()),
        ..config
    };
    let provider = EmbeddingProviderFactory::create(&with_key, None).unwrap();
    assert_eq!(provider.provider_name(), "gemini");
}

#[cfg(not(feature = "embedding-fastembed"))]
#[test]
fn test_fastembed_without_feature_is_a_configuration_error() {
    let config = EmbeddingConfig {
        provider: "fastembed".to_string(),
        ..EmbeddingConfig::default()
    };

    assert!(EmbeddingProviderFactory::create(&config, None).is_err());
}

#[test]
fn test_json_catalog_source_requires_path() {
    let config = CatalogSourceConfig {
        source: "json".to_string(),
        path: None,
    };

    assert!(CatalogSourceFactory::create(&config).is_err());

    let with_path = CatalogSourceConfig {
        source: "json".to_string(),
        path: Some("books.json".into()),
    };
    let source = CatalogSourceFactory::create(&with_path).unwrap();
    assert_eq!(source.source_name(), "json");
}

#[test]
fn test_unknown_catalog_source_is_a_configuration_error() {
    let config = CatalogSourceConfig {
        source: "carrier-pigeon".to_string(),
        path: None,
    };

    assert!(CatalogSourceFactory::create(&config).is_err());
}
