//! Embedding Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Testing | Complete |
//! | FastEmbedProvider | Local ML | Complete (optional) |
//!
//! The null provider is deterministic and offline, which makes it the
//! default for unit tests. FastEmbed runs ONNX models locally and requires
//! the `embedding-fastembed` feature.

#[cfg(feature = "embedding-fastembed")]
pub mod fastembed;
pub mod null;

#[cfg(feature = "embedding-fastembed")]
pub use self::fastembed::FastEmbedProvider;
pub use null::NullEmbeddingProvider;
