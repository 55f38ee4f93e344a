//! Domain layer constants
//!
//! Contains constants that are part of the recommendation domain logic and
//! are used by the application layer. Provider-specific constants live in
//! `librec-providers`, infrastructure constants in `librec-infrastructure`.

// ============================================================================
// RECOMMENDATION DOMAIN CONSTANTS
// ============================================================================

/// Default number of recommendations returned by a query
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// Batch size used when embedding the catalog during an index build
pub const EMBEDDING_BATCH_SIZE: usize = 64;

/// Keywords shorter than or equal to this length are ignored by the
/// keyword recommender
pub const KEYWORD_MIN_LENGTH: usize = 2;

/// Score contribution of a keyword found in an entry title
pub const KEYWORD_TITLE_WEIGHT: f32 = 2.0;

/// Score contribution of a keyword found in an entry authors field
pub const KEYWORD_AUTHORS_WEIGHT: f32 = 1.0;

// ============================================================================
// EMBEDDING DOMAIN CONSTANTS
// ============================================================================

/// Vectors with an L2 norm below this threshold are treated as degenerate
/// when normalizing
pub const EMBEDDING_NORM_EPSILON: f32 = 1e-12;
