//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! fanmatch-domain and infrastructure defaults in fanmatch-infrastructure.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension (for testing)
pub const EMBEDDING_DIMENSION_NULL: usize = 16;

/// Default FastEmbed model
pub const FASTEMBED_DEFAULT_MODEL: &str = "paraphrase-multilingual-mpnet-base-v2";

/// paraphrase-multilingual-mpnet-base-v2 dimension
pub const EMBEDDING_DIMENSION_MPNET: usize = 768;

/// MiniLM family dimension
pub const EMBEDDING_DIMENSION_MINILM: usize = 384;

/// Multilingual E5 large dimension
pub const EMBEDDING_DIMENSION_E5_LARGE: usize = 1024;

// ============================================================================
// PROFILE STORE CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Query parameter carrying the Realtime Database credential
pub const FIREBASE_AUTH_PARAM: &str = "auth";

/// Field of the push response holding the generated key
pub const FIREBASE_PUSH_KEY_FIELD: &str = "name";

/// Error message for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// TEXT EXTRACTION CONSTANTS
// ============================================================================

/// Default timeout of an external extraction command, in seconds
pub const EXTRACTION_DEFAULT_TIMEOUT_SECS: u64 = 60;
