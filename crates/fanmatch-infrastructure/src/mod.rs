//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain
//! layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, `FANMATCH__` env) |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Wires configuration into the application services |
//! | [`error_ext`] | Context helpers mapping foreign errors into domain errors |
//! | [`constants`] | Centralized configuration defaults |

// Provider registrations are collected only when the crate is linked
extern crate fanmatch_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{AppContext, init_app};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
