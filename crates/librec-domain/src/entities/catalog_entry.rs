//! Catalog Entry Entity
//!
//! A single book in the library catalog. Entries are read as an immutable
//! snapshot per index build; the engine never updates them in place.

use serde::{Deserialize, Serialize};

/// Entity: Library Catalog Entry
///
/// Identified by `id`, which is unique within a catalog snapshot. Only
/// `title` and `authors` participate in recommendation scoring; the other
/// fields are descriptive and carried through to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Unique catalog identifier
    pub id: u64,
    /// Book title
    pub title: String,
    /// Author names, comma or slash separated as in the source catalog
    pub authors: String,
    /// Average reader rating, when the catalog carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f32>,
    /// Number of ratings behind `average_rating`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count: Option<u64>,
    /// Publisher name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Publication date as recorded in the catalog (free-form)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    /// ISBN-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// ISO language code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Page count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pages: Option<u32>,
}

impl CatalogEntry {
    /// Create an entry with only the scoring-relevant fields set
    pub fn new(id: u64, title: impl Into<String>, authors: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            authors: authors.into(),
            average_rating: None,
            ratings_count: None,
            publisher: None,
            publication_date: None,
            isbn: None,
            language_code: None,
            num_pages: None,
        }
    }

    /// The text that represents this entry to the embedding provider.
    ///
    /// Combines title and authors so that both contribute to the vector.
    pub fn embedding_text(&self) -> String {
        format!("{} by {}", self.title, self.authors)
    }
}
