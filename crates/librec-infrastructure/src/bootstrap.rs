//! Composition Root
//!
//! Wires configuration into a ready-to-serve recommender: embedding
//! provider, catalog source, index. Request handling stays elsewhere;
//! this module only assembles the pieces.

use std::sync::Arc;

use tracing::info;

use librec_application::use_cases::SemanticRecommender;
use librec_domain::error::Result;
use librec_domain::ports::providers::CatalogSource;

use crate::config::AppConfig;
use crate::factory::{CatalogSourceFactory, EmbeddingProviderFactory};

/// Build a semantic recommender from configuration.
///
/// When `index.build_on_startup` is set, the first index build runs in a
/// background task: the handle is returned immediately and queries answer
/// `NotReady` until the build lands, so startup of unrelated request
/// handling is never blocked on embedding the catalog.
pub fn init_semantic_recommender(
    config: &AppConfig,
) -> Result<(Arc<SemanticRecommender>, Arc<dyn CatalogSource>)> {
    let provider = EmbeddingProviderFactory::create(&config.embedding, None)?;
    let source = CatalogSourceFactory::create(&config.catalog)?;

    info!(
        provider = provider.provider_name(),
        source = source.source_name(),
        "semantic recommender assembled"
    );

    let recommender = Arc::new(SemanticRecommender::with_batch_size(
        provider,
        config.embedding.batch_size,
    ));

    if config.index.build_on_startup {
        Arc::clone(&recommender).spawn_build(Arc::clone(&source));
    }

    Ok((recommender, source))
}
