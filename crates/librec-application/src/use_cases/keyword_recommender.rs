//! Keyword Recommender Use Case
//!
//! Recommendation by weighted keyword matching against title and authors.
//! The fallback strategy for deployments with no embedding model: no
//! warm-up, no index, the catalog is fetched per query.

use std::sync::Arc;

use async_trait::async_trait;

use librec_domain::constants::{
    KEYWORD_AUTHORS_WEIGHT, KEYWORD_MIN_LENGTH, KEYWORD_TITLE_WEIGHT,
};
use librec_domain::entities::CatalogEntry;
use librec_domain::error::Result;
use librec_domain::ports::providers::CatalogSource;
use librec_domain::value_objects::Recommendation;

use crate::ports::services::{IndexStatus, RecommenderInterface};

/// Keyword-matching recommender
///
/// Scores each entry by the keywords of the prompt: a keyword found in
/// the title counts double what one found in the authors field does.
/// Entries without a single hit are left out entirely.
pub struct KeywordRecommender {
    catalog_source: Arc<dyn CatalogSource>,
}

impl KeywordRecommender {
    /// Create a recommender reading from the given catalog source
    pub fn new(catalog_source: Arc<dyn CatalogSource>) -> Self {
        Self { catalog_source }
    }

    /// Split a prompt into scoring keywords.
    ///
    /// Lowercased whitespace tokens; short words carry no signal and are
    /// dropped.
    fn keywords(prompt: &str) -> Vec<String> {
        prompt
            .to_lowercase()
            .split_whitespace()
            .filter(|word| word.len() > KEYWORD_MIN_LENGTH)
            .map(ToString::to_string)
            .collect()
    }

    fn score(entry: &CatalogEntry, keywords: &[String]) -> f32 {
        let title = entry.title.to_lowercase();
        let authors = entry.authors.to_lowercase();

        keywords
            .iter()
            .map(|keyword| {
                let mut score = 0.0;
                if title.contains(keyword.as_str()) {
                    score += KEYWORD_TITLE_WEIGHT;
                }
                if authors.contains(keyword.as_str()) {
                    score += KEYWORD_AUTHORS_WEIGHT;
                }
                score
            })
            .sum()
    }
}

#[async_trait]
impl RecommenderInterface for KeywordRecommender {
    async fn recommend(&self, prompt: &str, limit: usize) -> Result<Vec<Recommendation>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let keywords = Self::keywords(prompt);
        if keywords.is_empty() {
            return Ok(Vec::new());
        }

        let entries = self.catalog_source.fetch_all().await?;

        let mut scored: Vec<Recommendation> = entries
            .into_iter()
            .filter_map(|entry| {
                let score = Self::score(&entry, &keywords);
                (score > 0.0).then(|| Recommendation::new(entry, score))
            })
            .collect();
        // Stable sort: equal scores keep catalog insertion order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(limit);
        Ok(scored)
    }

    fn status(&self) -> IndexStatus {
        IndexStatus::always_ready()
    }
}
