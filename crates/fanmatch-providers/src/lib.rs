//! # fanmatch - Provider Implementations
//!
//! User-selectable implementations of the ports declared in
//! `fanmatch-domain`. Every provider registers itself in the linkme
//! registries of `fanmatch-application` and is picked by name from
//! configuration.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | FastEmbed, Null |
//! | Profile store | `ProfileStore` | Firebase Realtime Database, InMemory |
//! | Text extraction | `TextExtractor` | Command, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! fanmatch-providers = { version = "0.1", default-features = false }
//! ```
//!
//! Disabling `embedding-fastembed` drops the ONNX runtime; only the null
//! embedding provider remains.

pub use fanmatch_domain::error::{Error, Result};
pub use fanmatch_domain::ports::providers::{EmbeddingProvider, ProfileStore, TextExtractor};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
pub mod embedding;

/// Profile persistence implementations
pub mod profile_store;

/// Document text extraction implementations
pub mod text_extraction;
