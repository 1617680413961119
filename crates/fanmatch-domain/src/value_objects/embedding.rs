//! Semantic Embedding Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// A fixed-length vector produced by an embedding model. Every vector of a
/// single catalog and every query vector compared against it must share the
/// same dimensionality.
///
/// ## Example
///
/// ```rust
/// use fanmatch_domain::value_objects::Embedding;
///
/// let embedding = Embedding::new(vec![0.1, 0.2, 0.3], "null-test");
/// assert_eq!(embedding.dimensions, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Create an embedding, deriving the dimensionality from the vector
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// Whether the vector holds no values
    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }

    /// Consume the embedding and return the raw vector
    pub fn into_vector(self) -> Vec<f32> {
        self.vector
    }
}
