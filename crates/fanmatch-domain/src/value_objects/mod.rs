//! Domain Value Objects
//!
//! Immutable value objects that flow through the matching pipeline.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of text |
//! | [`CatalogEntry`] | Precomputed reference vector with its description |
//! | [`Catalog`] | Ordered, read-only collection of catalog entries |
//! | [`MatchResult`] | Best catalog entry for a query and its cosine score |
//! | [`FanProfile`] | Structured answers collected from a fan |
//! | [`ProfileRecord`] | Flattened record handed to persistence |
//! | [`VerificationStatus`] | Outcome of the identity document check |

/// Catalog and match value objects
pub mod catalog;
/// Semantic embedding value objects
pub mod embedding;
/// Fan profile value objects
pub mod profile;
/// Persistence record
pub mod record;
/// Identity verification value objects
pub mod verification;

// Re-export commonly used value objects
pub use catalog::{Affinity, Catalog, CatalogEntry, MatchResult};
pub use embedding::Embedding;
pub use profile::{FanProfile, FavoriteGame, PrimaryRole};
pub use record::ProfileRecord;
pub use verification::{ExtractionOutcome, VerificationStatus};
