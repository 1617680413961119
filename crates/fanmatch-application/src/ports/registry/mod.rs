//! Provider Registry System
//!
//! Auto-registration of providers through `linkme` distributed slices.
//! A provider crate submits an entry at compile time and the infrastructure
//! layer resolves it by the name given in configuration.
//!
//! ```text
//! 1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]
//!                       static ENTRY: ProviderEntry = ...
//! 2. Registry declares: #[linkme::distributed_slice]
//!                       pub static PROVIDERS: [Entry] = [..]
//! 3. Resolver queries:  PROVIDERS.iter()
//! 4. Config selects:    "provider = fastembed" -> FastEmbedProvider
//! ```
//!
//! ### Registering a Provider (in fanmatch-providers)
//!
//! ```ignore
//! use fanmatch_application::ports::registry::{EmbeddingProviderEntry, EMBEDDING_PROVIDERS};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "null",
//!     description: "Deterministic test provider",
//!     factory: |config| Ok(Arc::new(NullEmbeddingProvider::from_config(config))),
//! };
//! ```

pub mod embedding;
pub mod profile_store;
pub mod text_extraction;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry, list_embedding_providers,
    resolve_embedding_provider,
};
pub use profile_store::{
    PROFILE_STORES, ProfileStoreConfig, ProfileStoreEntry, list_profile_stores,
    resolve_profile_store,
};
pub use text_extraction::{
    TEXT_EXTRACTORS, TextExtractorConfig, TextExtractorEntry, list_text_extractors,
    resolve_text_extractor,
};
