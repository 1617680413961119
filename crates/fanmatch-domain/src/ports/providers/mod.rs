//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Text to vector embedding |
//! | TextExtractor | Identity document text extraction |
//! | ProfileStore | Append-only profile persistence |

/// Embedding provider port
pub mod embedding;
/// Profile persistence port
pub mod profile_store;
/// Document text extraction port
pub mod text_extraction;

pub use embedding::EmbeddingProvider;
pub use profile_store::ProfileStore;
pub use text_extraction::TextExtractor;
