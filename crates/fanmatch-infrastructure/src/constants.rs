//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "fanmatch.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "fanmatch";

/// Environment variable prefix (nested keys are separated by `__`)
pub const CONFIG_ENV_PREFIX: &str = "FANMATCH";

// ============================================================================
// EMBEDDING CONSTANTS
// ============================================================================

/// Default embedding provider
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "fastembed";

/// Default embedding model
pub const DEFAULT_EMBEDDING_MODEL: &str = "paraphrase-multilingual-mpnet-base-v2";

// ============================================================================
// CATALOG CONSTANTS
// ============================================================================

/// Default location of the serialized catalog
pub const DEFAULT_CATALOG_PATH: &str = "data/players_vectors.json";

/// Default location of the `name -> description` source mapping
pub const DEFAULT_CATALOG_SOURCE_PATH: &str = "data/players.json";

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// Default profile store
pub const DEFAULT_STORAGE_PROVIDER: &str = "firebase";

/// Default collection records are appended to
pub const DEFAULT_STORAGE_COLLECTION: &str = "users";

/// Default storage request timeout in seconds
pub const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// EXTRACTION CONSTANTS
// ============================================================================

/// Default text extractor
pub const DEFAULT_EXTRACTION_PROVIDER: &str = "null";

/// Extractor name meaning "no extractor configured"
pub const EXTRACTION_PROVIDER_NONE: &str = "none";

/// Default extraction timeout in seconds
pub const DEFAULT_EXTRACTION_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "FANMATCH_LOG";

/// File stem used when the log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "fanmatch";
