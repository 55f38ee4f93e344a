//! JSON file catalog source
//!
//! Reads a catalog dump: a JSON array of book records in the classic
//! Goodreads export shape (`bookID`, `title`, `authors`, ...). The dump
//! format is loose — numeric fields sometimes arrive as strings — so
//! parsing is tolerant per record and malformed records are skipped with
//! a warning rather than failing the whole load.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use librec_domain::entities::CatalogEntry;
use librec_domain::error::{Error, Result};
use librec_domain::ports::providers::CatalogSource;

/// Catalog source backed by a JSON file
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    /// Create a source reading from the given file path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Convert one raw record into an entry.
    ///
    /// `bookID` is required; everything else falls back to empty/absent
    /// the way the original catalog loader treated partial records.
    fn entry_from_value(value: &Value) -> Option<CatalogEntry> {
        let id = opt_u64(value.get("bookID"))?;

        Some(CatalogEntry {
            id,
            title: opt_string(value.get("title")).unwrap_or_default(),
            authors: opt_string(value.get("authors")).unwrap_or_default(),
            average_rating: opt_f32(value.get("average_rating")),
            ratings_count: opt_u64(value.get("ratings_count")),
            publisher: opt_string(value.get("publisher")),
            publication_date: opt_string(value.get("publication_date")),
            isbn: opt_string(value.get("isbn")),
            language_code: opt_string(value.get("language_code")),
            num_pages: opt_u64(value.get("num_pages")).map(|n| n as u32),
        })
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<CatalogEntry>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            Error::catalog_with_source(
                format!("failed to read catalog file {}", self.path.display()),
                e,
            )
        })?;

        let records: Vec<Value> = serde_json::from_slice(&bytes).map_err(|e| {
            Error::catalog_with_source(
                format!("catalog file {} is not a JSON array", self.path.display()),
                e,
            )
        })?;

        let total = records.len();
        let entries: Vec<CatalogEntry> = records
            .iter()
            .filter_map(|record| {
                let entry = Self::entry_from_value(record);
                if entry.is_none() {
                    warn!("skipping catalog record without a usable bookID");
                }
                entry
            })
            .collect();

        debug!(
            loaded = entries.len(),
            skipped = total - entries.len(),
            path = %self.path.display(),
            "catalog file parsed"
        );
        Ok(entries)
    }

    fn source_name(&self) -> &str {
        "json"
    }
}

/// Read a u64 that may arrive as a number or a numeric string
fn opt_u64(value: Option<&Value>) -> Option<u64> {
    match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read an f32 that may arrive as a number or a numeric string
fn opt_f32(value: Option<&Value>) -> Option<f32> {
    match value {
        Some(Value::Number(n)) => n.as_f64().map(|f| f as f32),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a non-empty string field
fn opt_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
