//! Application Layer - fanmatch
//!
//! Use cases of the fan matching system, orchestrated over the ports
//! declared in `fanmatch-domain`.
//!
//! ## Use Cases
//!
//! - Text composition of a fan profile
//! - Embedding model loading (load once, reuse) and text encoding
//! - Offline reference catalog building
//! - Catalog loading (memoized by path)
//! - Best match selection by cosine similarity
//! - Identity verification and onboarding
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `fanmatch-domain`: value objects, errors and port traits
//! - Pure Rust libraries for async, serialization, logging and caching

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
