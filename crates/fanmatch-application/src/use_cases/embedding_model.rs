//! Embedding Model Provider
//!
//! Embedding models are expensive to initialise, so each configured model is
//! loaded at most once per process and the handle reused. [`encode`] turns
//! text into a vector, returning `None` for the expected "nothing to encode"
//! cases instead of an error.

use std::sync::{Arc, LazyLock};
use std::time::Instant;

use dashmap::DashMap;
use fanmatch_domain::Embedding;
use fanmatch_domain::error::{Error, Result};
use tracing::{debug, info, warn};

use crate::ports::providers::EmbeddingProvider;
use crate::ports::registry::{EmbeddingProviderConfig, resolve_embedding_provider};

static GLOBAL_MODELS: LazyLock<Arc<EmbeddingModelCache>> =
    LazyLock::new(|| Arc::new(EmbeddingModelCache::new()));

/// Load-once cache of embedding models, keyed by provider and model
#[derive(Default)]
pub struct EmbeddingModelCache {
    models: DashMap<String, Arc<dyn EmbeddingProvider>>,
}

impl std::fmt::Debug for EmbeddingModelCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingModelCache")
            .field("loaded", &self.models.len())
            .finish()
    }
}

impl EmbeddingModelCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL_MODELS)
    }

    /// Load the configured model, or return the already loaded handle
    pub fn load_model(&self, config: &EmbeddingProviderConfig) -> Result<Arc<dyn EmbeddingProvider>> {
        self.load_with(&config.cache_key(), || {
            resolve_embedding_provider(config).map_err(Error::embedding)
        })
    }

    /// Return the model cached under `key`, running `init` on first access
    ///
    /// `init` runs at most once per key even under concurrent first access.
    /// A failed `init` leaves the key empty.
    pub fn load_with<F>(&self, key: &str, init: F) -> Result<Arc<dyn EmbeddingProvider>>
    where
        F: FnOnce() -> Result<Arc<dyn EmbeddingProvider>>,
    {
        if let Some(model) = self.models.get(key) {
            return Ok(Arc::clone(model.value()));
        }

        let model = self
            .models
            .entry(key.to_string())
            .or_try_insert_with(|| {
                let started = Instant::now();
                let model = init()?;
                info!(
                    key,
                    provider = model.provider_name(),
                    dimensions = model.dimensions(),
                    elapsed_ms = started.elapsed().as_millis(),
                    "Embedding model loaded"
                );
                Ok::<_, Error>(model)
            })?;

        Ok(Arc::clone(model.value()))
    }

    /// Whether a model is cached under `config`'s key
    pub fn is_loaded(&self, config: &EmbeddingProviderConfig) -> bool {
        self.models.contains_key(&config.cache_key())
    }
}

/// Encode `text` with `model`
///
/// Returns `None` when the text is blank, the model is unavailable or the
/// model fails to produce a vector.
pub fn encode(text: &str, model: Option<&dyn EmbeddingProvider>) -> Option<Embedding> {
    let text = text.trim();
    if text.is_empty() {
        debug!("Nothing to encode");
        return None;
    }
    let Some(model) = model else {
        warn!("Embedding model unavailable, skipping encoding");
        return None;
    };

    match model.embed(text) {
        Ok(embedding) if !embedding.is_empty() => Some(embedding),
        Ok(_) => {
            warn!(provider = model.provider_name(), "Model returned an empty vector");
            None
        }
        Err(e) => {
            warn!(provider = model.provider_name(), error = %e, "Encoding failed");
            None
        }
    }
}
