//! # fanmatch
//!
//! Matches an esports fan's self-described profile to the most similar
//! professional player in a reference catalog, using sentence embeddings and
//! cosine similarity.
//!
//! ## Example
//!
//! ```ignore
//! use fanmatch::infrastructure::config::ConfigLoader;
//! use fanmatch::infrastructure::init_app;
//!
//! let ctx = init_app(ConfigLoader::new().load()?)?;
//! let outcome = ctx.matching().match_text("Favorite game: Counter-Strike.");
//! println!("{}", outcome.describe());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Value objects, provider ports and the domain error
//! - `application` - Matching pipeline, catalog jobs and onboarding
//! - `infrastructure` - Configuration, logging and service wiring
//! - `cli` - The `fanmatch` command line

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use fanmatch_domain::*;
}

/// Application layer - use cases and provider registries
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use fanmatch_application::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use fanmatch_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use cli::{Cli, Command, run};
