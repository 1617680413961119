//! Embedding configuration types

use std::path::PathBuf;

use fanmatch_application::ports::registry::EmbeddingProviderConfig;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EMBEDDING_MODEL, DEFAULT_EMBEDDING_PROVIDER};

/// Embedding model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Registered provider name (`fastembed`, `null`)
    pub provider: String,

    /// Model identifier understood by the provider
    pub model: String,

    /// Directory for downloaded model weights
    pub cache_dir: Option<PathBuf>,

    /// Show a progress bar while weights download
    pub show_download_progress: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            cache_dir: None,
            show_download_progress: false,
        }
    }
}

impl EmbeddingConfig {
    /// Registry configuration for resolving the provider
    pub fn to_provider_config(&self) -> EmbeddingProviderConfig {
        let config = EmbeddingProviderConfig::new(&self.provider)
            .with_model(&self.model)
            .with_download_progress(self.show_download_progress);
        match &self.cache_dir {
            Some(dir) => config.with_cache_dir(dir),
            None => config,
        }
    }
}
