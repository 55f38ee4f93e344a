//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live
//! in `librec-domain`, infrastructure constants in `librec-infrastructure`.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension (for testing)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// FastEmbed default dimension (all-MiniLM-L6-v2)
pub const EMBEDDING_DIMENSION_FASTEMBED_DEFAULT: usize = 384;

/// Ollama nomic-embed-text dimension
pub const EMBEDDING_DIMENSION_OLLAMA_NOMIC: usize = 768;

/// Ollama all-minilm dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MINILM: usize = 384;

/// Ollama mxbai-embed-large dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MXBAI: usize = 1024;

/// Ollama default dimension
pub const EMBEDDING_DIMENSION_OLLAMA_DEFAULT: usize = 768;

/// Gemini embedding dimension (text-embedding-004)
pub const EMBEDDING_DIMENSION_GEMINI: usize = 768;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";
