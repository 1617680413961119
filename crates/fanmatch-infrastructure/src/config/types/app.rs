//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{CatalogConfig, EmbeddingConfig, ExtractionConfig, LoggingConfig, StorageConfig};

/// Main application configuration
///
/// Every section falls back to its defaults, so a configuration file only
/// needs the keys it overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Embedding model settings
    pub embedding: EmbeddingConfig,

    /// Reference catalog locations
    pub catalog: CatalogConfig,

    /// Profile persistence settings
    pub storage: StorageConfig,

    /// Identity document text extraction settings
    pub extraction: ExtractionConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}
