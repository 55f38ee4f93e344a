//! Tests for the composition root

use std::time::Duration;

use librec_application::ports::services::{IndexState, RecommenderInterface};
use librec_infrastructure::config::AppConfig;
use librec_infrastructure::init_semantic_recommender;

fn null_config(build_on_startup: bool) -> AppConfig {
    let mut config = AppConfig::default();
    config.embedding.provider = "null".to_string();
    config.catalog.source = "static".to_string();
    config.index.build_on_startup = build_on_startup;
    config
}

#[tokio::test]
async fn test_without_startup_build_index_stays_empty() {
    let (recommender, _source) = init_semantic_recommender(&null_config(false)).unwrap();

    assert_eq!(recommender.status().state, IndexState::Empty);
    assert!(recommender.recommend("anything", 5).await.unwrap_err().is_not_ready());
}

#[tokio::test]
async fn test_startup_build_reaches_ready_in_background() {
    let (recommender, _source) = init_semantic_recommender(&null_config(true)).unwrap();

    // The build runs in a spawned task; poll briefly until it lands
    let mut ready = false;
    for _ in 0..100 {
        if recommender.status().state == IndexState::Ready {
            ready = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert!(ready, "index never reached Ready");
    // Static source is empty: a valid Ready index with zero entries
    assert_eq!(recommender.status().entries, 0);
    assert!(recommender.recommend("anything", 5).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_provider_fails_bootstrap() {
    let mut config = null_config(false);
    config.embedding.provider = "telepathy".to_string();

    assert!(init_semantic_recommender(&config).is_err());
}
