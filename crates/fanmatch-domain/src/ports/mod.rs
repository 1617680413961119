//! Domain Port Interfaces
//!
//! Boundary contracts implemented by the provider layer. High-level code
//! depends only on these traits; concrete adapters live in
//! `fanmatch-providers` and are selected by configuration.

/// External service provider ports
pub mod providers;

pub use providers::{EmbeddingProvider, ProfileStore, TextExtractor};
