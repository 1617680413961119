//! Configuration types module

pub mod app;
pub mod catalog;
pub mod embedding;
pub mod extraction;
pub mod logging;
pub mod storage;

// Re-export main types
pub use app::AppConfig;
pub use catalog::CatalogConfig;
pub use embedding::EmbeddingConfig;
pub use extraction::ExtractionConfig;
pub use logging::LoggingConfig;
pub use storage::StorageConfig;
