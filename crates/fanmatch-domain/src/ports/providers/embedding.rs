use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Text Embedding Interface
///
/// Transforms text into fixed-size semantic vectors. Implementations are
/// expensive to construct (model weights are loaded on creation) and are
/// meant to be created once and shared.
///
/// Encoding runs synchronously: a call blocks until the vector is ready.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item. Providers only
/// need to implement `embed_batch()`.
///
/// # Example
///
/// ```ignore
/// use fanmatch_domain::ports::providers::EmbeddingProvider;
///
/// let embedding = provider.embed("Playstyle: aggressive entry.")?;
/// assert_eq!(embedding.dimensions, provider.dimensions());
/// ```
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()])?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of the vectors this provider produces
    fn dimensions(&self) -> usize;

    /// Identifier of the provider implementation (e.g. "fastembed", "null")
    fn provider_name(&self) -> &str;

    /// Identifier of the underlying model
    fn model_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    fn health_check(&self) -> Result<()> {
        self.embed("health check")?;
        Ok(())
    }
}
