//! Configuration management
//!
//! Figment-based loading of [`AppConfig`] from defaults, an optional TOML
//! file and `FANMATCH__` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config};
pub use types::*;
