//! # fanmatch Domain Layer
//!
//! Core types shared by every other crate in the workspace: the domain
//! error, the value objects that flow through the matching pipeline, and
//! the provider ports implemented by `fanmatch-providers`.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Field labels, placeholders and domain defaults |
//! | [`value_objects`] | Embeddings, catalog entries, fan profiles, records |
//! | [`ports`] | Provider contracts (embedding, text extraction, persistence) |

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Provider port interfaces
pub mod ports;
/// Immutable value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    Affinity, Catalog, CatalogEntry, Embedding, ExtractionOutcome, FanProfile, FavoriteGame,
    MatchResult, PrimaryRole, ProfileRecord, VerificationStatus,
};
