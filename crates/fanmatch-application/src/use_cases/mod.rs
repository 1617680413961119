//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`composer`] | Profile answers to embeddable text |
//! | [`embedding_model`] | Load-once model cache and `encode` |
//! | [`catalog_builder`] | Offline reference catalog job |
//! | [`catalog_loader`] | Memoized catalog reader |
//! | [`matcher`] | Cosine similarity best match |
//! | [`matching_service`] | compose -> encode -> match pipeline |
//! | [`verification`] | Identity document check |
//! | [`onboarding`] | Full registration flow |

pub mod catalog_builder;
pub mod catalog_loader;
pub mod composer;
pub mod embedding_model;
pub mod matcher;
pub mod matching_service;
pub mod onboarding;
pub mod verification;

pub use catalog_builder::{BuildReport, CatalogBuilder, SkippedEntry};
pub use catalog_loader::{CatalogLoader, read_catalog};
pub use composer::compose;
pub use embedding_model::{EmbeddingModelCache, encode};
pub use matcher::{MatchError, cosine_similarity, find_best_match, try_find_best_match};
pub use matching_service::{MatchOutcome, MatchingService};
pub use onboarding::{FanSubmission, OnboardingReport, OnboardingService};
pub use verification::IdentityVerifier;
