//! FastEmbed Local Embedding Provider
//!
//! Implements the EmbeddingProvider port using the fastembed library for local
//! embedding generation. Uses ONNX models for inference without external API calls.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use fanmatch_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use fanmatch_domain::error::{Error, Result};
use fanmatch_domain::ports::providers::EmbeddingProvider;
use fanmatch_domain::value_objects::Embedding;
use tracing::info;

use crate::constants::{
    EMBEDDING_DIMENSION_E5_LARGE, EMBEDDING_DIMENSION_MINILM, EMBEDDING_DIMENSION_MPNET,
    FASTEMBED_DEFAULT_MODEL,
};

/// FastEmbed local embedding provider
///
/// The ONNX session needs exclusive access, so calls are serialized through
/// a mutex. Loading downloads the weights on first use and can take a while.
///
/// ## Example
///
/// ```rust,no_run
/// use fanmatch_providers::embedding::FastEmbedProvider;
///
/// let provider = FastEmbedProvider::new().expect("Failed to initialize");
/// ```
pub struct FastEmbedProvider {
    model: Mutex<TextEmbedding>,
    model_name: String,
    dimensions: usize,
}

impl FastEmbedProvider {
    /// Create a provider with the default multilingual model
    pub fn new() -> Result<Self> {
        let (model, dimensions) = parse_embedding_model(FASTEMBED_DEFAULT_MODEL)?;
        Self::with_options(
            InitOptions::new(model).with_show_download_progress(true),
            FASTEMBED_DEFAULT_MODEL,
            dimensions,
        )
    }

    /// Create a provider from a model identifier and optional cache directory
    pub fn from_model_name(
        model_name: &str,
        cache_dir: Option<PathBuf>,
        show_download_progress: bool,
    ) -> Result<Self> {
        let (model, dimensions) = parse_embedding_model(model_name)?;
        let mut options =
            InitOptions::new(model).with_show_download_progress(show_download_progress);
        if let Some(dir) = cache_dir {
            options = options.with_cache_dir(dir);
        }
        Self::with_options(options, model_name, dimensions)
    }

    /// Create a provider with custom initialization options
    pub fn with_options(
        init_options: InitOptions,
        model_name: &str,
        dimensions: usize,
    ) -> Result<Self> {
        info!(model = model_name, "Initializing FastEmbed model");
        let text_embedding = TextEmbedding::try_new(init_options).map_err(|e| {
            Error::embedding(format!("Failed to initialize FastEmbed model: {e}"))
        })?;

        Ok(Self {
            model: Mutex::new(text_embedding),
            model_name: model_name.to_string(),
            dimensions,
        })
    }

    /// Get the maximum tokens supported by this model (approximate)
    pub fn max_tokens(&self) -> usize {
        512
    }
}

impl EmbeddingProvider for FastEmbedProvider {
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let mut model = self
            .model
            .lock()
            .map_err(|_| Error::embedding("FastEmbed model lock poisoned"))?;

        let vectors = model
            .embed(text_refs, None)
            .map_err(|e| Error::embedding(format!("FastEmbed embedding failed: {e}")))?;

        Ok(vectors
            .into_iter()
            .map(|v| Embedding::new(v, self.model_name.clone()))
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "fastembed"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Parse a model identifier into the fastembed model and its dimensionality
pub fn parse_embedding_model(model_name: &str) -> Result<(EmbeddingModel, usize)> {
    let normalized = model_name
        .trim()
        .trim_start_matches("sentence-transformers/")
        .to_lowercase();

    let parsed = match normalized.as_str() {
        "paraphrase-multilingual-mpnet-base-v2" | "paraphrasemlmpnetbasev2" => {
            (EmbeddingModel::ParaphraseMLMpnetBaseV2, EMBEDDING_DIMENSION_MPNET)
        }
        "paraphrase-multilingual-minilm-l12-v2" | "paraphrasemlminilml12v2" => {
            (EmbeddingModel::ParaphraseMLMiniLML12V2, EMBEDDING_DIMENSION_MINILM)
        }
        "all-minilm-l6-v2" | "allminilml6v2" => {
            (EmbeddingModel::AllMiniLML6V2, EMBEDDING_DIMENSION_MINILM)
        }
        "multilingual-e5-small" => (EmbeddingModel::MultilingualE5Small, EMBEDDING_DIMENSION_MINILM),
        "multilingual-e5-base" => (EmbeddingModel::MultilingualE5Base, EMBEDDING_DIMENSION_MPNET),
        "multilingual-e5-large" => {
            (EmbeddingModel::MultilingualE5Large, EMBEDDING_DIMENSION_E5_LARGE)
        }
        _ => {
            return Err(Error::embedding(format!(
                "Unsupported FastEmbed model '{model_name}'"
            )));
        }
    };
    Ok(parsed)
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Factory function for creating FastEmbed provider instances.
fn fastembed_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let model_name = config.model.as_deref().unwrap_or(FASTEMBED_DEFAULT_MODEL);

    let provider = FastEmbedProvider::from_model_name(
        model_name,
        config.cache_dir.clone(),
        config.show_download_progress,
    )
    .map_err(|e| format!("Failed to create FastEmbed provider: {e}"))?;

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static FASTEMBED_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "fastembed",
    description: "FastEmbed local provider (paraphrase-multilingual-mpnet-base-v2, MiniLM, E5)",
    factory: fastembed_factory,
};
