//! Semantic Recommender Use Case
//!
//! The embedding-based recommendation index. Holds one catalog snapshot
//! with a precomputed vector per entry and ranks entries by cosine
//! similarity against the query embedding.
//!
//! ## Lifecycle
//!
//! `Empty -> Building -> Ready`, with `Ready -> Building` on explicit
//! rebuild only. The replacement snapshot is constructed fully off to the
//! side and swapped in as a single atomic store, so the previous snapshot
//! keeps serving queries for the whole duration of a rebuild and no query
//! ever observes a torn index.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use librec_domain::entities::CatalogEntry;
use librec_domain::error::{Error, Result};
use librec_domain::ports::providers::{CatalogSource, EmbeddingProvider};
use librec_domain::value_objects::{Embedding, Recommendation};

use crate::ports::services::{IndexState, IndexStatus, RecommenderInterface};

/// One catalog entry with its precomputed embedding.
///
/// Entry and vector are inserted as a unit during build; the snapshot is
/// never patched field-by-field afterwards.
struct IndexedEntry {
    entry: CatalogEntry,
    embedding: Embedding,
}

/// Immutable index snapshot: entries in catalog insertion order, which is
/// also the tie-break order for equal scores.
struct IndexSnapshot {
    entries: Vec<IndexedEntry>,
    dimensions: usize,
}

/// Result of an index build
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Number of entries embedded and indexed
    pub indexed: usize,
    /// Number of entries dropped because their embedding failed
    pub skipped: usize,
}

/// Embedding-based recommendation index
///
/// Queries are read-only against the currently loaded snapshot and run
/// concurrently without coordination; builds are serialized and publish
/// their result with one `arc-swap` store. The similarity scan is O(n)
/// per query, which is fine at catalog sizes in the low thousands.
pub struct SemanticRecommender {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    snapshot: ArcSwapOption<IndexSnapshot>,
    building: AtomicBool,
    build_lock: Mutex<()>,
    batch_size: usize,
}

impl SemanticRecommender {
    /// Create an index in the `Empty` state
    pub fn new(embedding_provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self::with_batch_size(
            embedding_provider,
            librec_domain::constants::EMBEDDING_BATCH_SIZE,
        )
    }

    /// Create an index with a custom embedding batch size
    pub fn with_batch_size(embedding_provider: Arc<dyn EmbeddingProvider>, batch_size: usize) -> Self {
        Self {
            embedding_provider,
            snapshot: ArcSwapOption::const_empty(),
            building: AtomicBool::new(false),
            build_lock: Mutex::new(()),
            batch_size: batch_size.max(1),
        }
    }

    /// Build (or rebuild) the index from a catalog snapshot.
    ///
    /// Embeds entries in batches, assembles the new snapshot off to the
    /// side and swaps it in atomically. Entries whose embedding fails are
    /// dropped with a warning; a non-empty catalog where *every* entry
    /// failed keeps the previous snapshot and surfaces the provider
    /// error instead of publishing an index that would masquerade as
    /// "no matches". Concurrent build calls are serialized.
    pub async fn build(&self, entries: Vec<CatalogEntry>) -> Result<BuildReport> {
        let _guard = self.build_lock.lock().await;
        self.building.store(true, Ordering::SeqCst);
        let result = self.build_snapshot(entries).await;
        self.building.store(false, Ordering::SeqCst);

        match result {
            Ok((snapshot, report)) => {
                info!(
                    indexed = report.indexed,
                    skipped = report.skipped,
                    dimensions = snapshot.dimensions,
                    "recommendation index built"
                );
                self.snapshot.store(Some(Arc::new(snapshot)));
                Ok(report)
            }
            Err(error) => Err(error),
        }
    }

    /// Fetch the catalog from a source and build the index from it
    pub async fn rebuild_from(&self, source: &dyn CatalogSource) -> Result<BuildReport> {
        let entries = source.fetch_all().await?;
        debug!(
            count = entries.len(),
            source = source.source_name(),
            "catalog snapshot fetched"
        );
        self.build(entries).await
    }

    /// Kick off a background build so startup is not blocked.
    ///
    /// Queries return `NotReady` until the build lands.
    pub fn spawn_build(self: Arc<Self>, source: Arc<dyn CatalogSource>) -> JoinHandle<()> {
        tokio::spawn(async move {
            if let Err(err) = self.rebuild_from(source.as_ref()).await {
                error!(error = %err, "background index build failed");
            }
        })
    }

    /// Rank the snapshot against a query, racing the embedding call (the
    /// only suspension point) against a caller-supplied cancellation
    /// token so a slow provider cannot stall the caller indefinitely.
    pub async fn recommend_with_cancellation(
        &self,
        prompt: &str,
        limit: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<Recommendation>> {
        let snapshot = self.serving_snapshot()?;
        if limit == 0 || snapshot.entries.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = tokio::select! {
            // An already-cancelled token must win over an instant provider
            biased;
            () = cancel.cancelled() => {
                return Err(Error::cancelled("recommendation query cancelled"));
            }
            result = self.embedding_provider.embed(prompt) => result?,
        };

        Self::rank(&snapshot, &query_embedding, limit)
    }

    fn serving_snapshot(&self) -> Result<Arc<IndexSnapshot>> {
        self.snapshot
            .load_full()
            .ok_or_else(|| Error::not_ready("recommendation index"))
    }

    /// Score every stored entry, sort descending and truncate.
    ///
    /// The sort is stable, so equal scores keep catalog insertion order
    /// and results are deterministic for a fixed provider.
    fn rank(
        snapshot: &IndexSnapshot,
        query: &Embedding,
        limit: usize,
    ) -> Result<Vec<Recommendation>> {
        if query.dimensions != snapshot.dimensions {
            return Err(Error::embedding(format!(
                "query embedding has {} dimensions, index has {}",
                query.dimensions, snapshot.dimensions
            )));
        }

        let mut scored: Vec<Recommendation> = snapshot
            .entries
            .iter()
            .map(|indexed| {
                Recommendation::new(indexed.entry.clone(), query.dot(&indexed.embedding))
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(limit);
        Ok(scored)
    }

    async fn build_snapshot(
        &self,
        entries: Vec<CatalogEntry>,
    ) -> Result<(IndexSnapshot, BuildReport)> {
        let total = entries.len();
        let mut indexed: Vec<IndexedEntry> = Vec::with_capacity(total);
        let mut dimensions: Option<usize> = None;
        let mut last_error: Option<Error> = None;

        for batch in entries.chunks(self.batch_size) {
            let texts: Vec<String> = batch.iter().map(CatalogEntry::embedding_text).collect();

            match self.embedding_provider.embed_batch(&texts).await {
                Ok(embeddings) if embeddings.len() == batch.len() => {
                    for (entry, embedding) in batch.iter().zip(embeddings) {
                        Self::push_indexed(&mut indexed, &mut dimensions, entry, embedding);
                    }
                }
                Ok(embeddings) => {
                    warn!(
                        expected = batch.len(),
                        received = embeddings.len(),
                        "provider returned a short batch, dropping it"
                    );
                    last_error = Some(Error::embedding("provider returned a short batch"));
                }
                Err(batch_error) => {
                    // One bad entry must not sink its batch-mates: fall
                    // back to embedding the batch one entry at a time and
                    // drop only the entries that still fail.
                    debug!(error = %batch_error, "batch embedding failed, isolating per entry");
                    for entry in batch {
                        match self.embedding_provider.embed(&entry.embedding_text()).await {
                            Ok(embedding) => {
                                Self::push_indexed(&mut indexed, &mut dimensions, entry, embedding);
                            }
                            Err(entry_error) => {
                                warn!(
                                    id = entry.id,
                                    title = %entry.title,
                                    error = %entry_error,
                                    "dropping entry, embedding failed"
                                );
                                last_error = Some(entry_error);
                            }
                        }
                    }
                }
            }
        }

        if indexed.is_empty() && total > 0 {
            // Nothing survived: publishing an empty index here would turn
            // a provider outage into "no matches" for every caller.
            return Err(last_error
                .unwrap_or_else(|| Error::embedding("no catalog entry could be embedded")));
        }

        let report = BuildReport {
            indexed: indexed.len(),
            skipped: total - indexed.len(),
        };
        let snapshot = IndexSnapshot {
            dimensions: dimensions.unwrap_or_else(|| self.embedding_provider.dimensions()),
            entries: indexed,
        };
        Ok((snapshot, report))
    }

    /// Append an entry, keeping the snapshot dimensionally consistent.
    ///
    /// The first successful embedding fixes the snapshot's dimensions;
    /// later mismatches are dropped like any other per-entry failure.
    fn push_indexed(
        indexed: &mut Vec<IndexedEntry>,
        dimensions: &mut Option<usize>,
        entry: &CatalogEntry,
        embedding: Embedding,
    ) {
        let expected = *dimensions.get_or_insert(embedding.dimensions);
        if embedding.dimensions != expected {
            warn!(
                id = entry.id,
                expected,
                received = embedding.dimensions,
                "dropping entry, embedding dimensions differ from index"
            );
            return;
        }
        indexed.push(IndexedEntry {
            entry: entry.clone(),
            embedding,
        });
    }
}

#[async_trait]
impl RecommenderInterface for SemanticRecommender {
    async fn recommend(&self, prompt: &str, limit: usize) -> Result<Vec<Recommendation>> {
        let snapshot = self.serving_snapshot()?;
        if limit == 0 || snapshot.entries.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = self.embedding_provider.embed(prompt).await?;
        Self::rank(&snapshot, &query_embedding, limit)
    }

    fn status(&self) -> IndexStatus {
        let snapshot = self.snapshot.load();
        let state = if self.building.load(Ordering::SeqCst) {
            IndexState::Building
        } else if snapshot.is_some() {
            IndexState::Ready
        } else {
            IndexState::Empty
        };
        IndexStatus {
            state,
            entries: snapshot.as_ref().map_or(0, |s| s.entries.len()),
            dimensions: snapshot.as_ref().map(|s| s.dimensions),
        }
    }
}
