//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use std::sync::Arc;

use fanmatch_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use fanmatch_domain::error::Result;
use fanmatch_domain::ports::providers::EmbeddingProvider;
use fanmatch_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_NULL;

/// Null embedding provider for testing
///
/// The same text always yields the same vector; different texts almost
/// always yield different vectors.
///
/// # Example
///
/// ```rust
/// use fanmatch_providers::embedding::NullEmbeddingProvider;
/// use fanmatch_providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 16);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_NULL)
    }

    /// Create a provider producing vectors of `dimensions` values
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        // FNV-1a so the vector does not depend on the std hasher seed
        let hash = text.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |acc, b| {
            (acc ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
        });

        (0..self.dimensions)
            .map(|j| {
                let mixed = hash.rotate_left((j % 64) as u32) ^ (j as u64).wrapping_mul(0x9e37_79b9);
                ((mixed % 2000) as f32 / 1000.0) - 1.0
            })
            .collect()
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddingProvider for NullEmbeddingProvider {
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding::new(self.vector_for(text), "null-test"))
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }

    fn model_name(&self) -> &str {
        "null-test"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic hash-based embeddings)",
    factory: |config: &EmbeddingProviderConfig| {
        let provider: Arc<dyn EmbeddingProvider> = Arc::new(
            config
                .dimensions
                .map_or_else(NullEmbeddingProvider::new, NullEmbeddingProvider::with_dimensions),
        );
        Ok(provider)
    },
};
