//! Port Interfaces
//!
//! Provider port traits live in the domain crate and are re-exported here so
//! that use cases and provider crates import them from one place. The
//! registry module declares the linkme slices providers register into.

/// Provider registry for dynamic provider discovery
pub mod registry;

/// External service provider ports
pub mod providers {
    pub use fanmatch_domain::ports::providers::*;
}

pub use providers::{EmbeddingProvider, ProfileStore, TextExtractor};
pub use registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry, PROFILE_STORES,
    ProfileStoreConfig, ProfileStoreEntry, TEXT_EXTRACTORS, TextExtractorConfig,
    TextExtractorEntry, list_embedding_providers, list_profile_stores, list_text_extractors,
    resolve_embedding_provider, resolve_profile_store, resolve_text_extractor,
};
