//! Document Text Extraction Implementations
//!
//! | Extractor | Notes |
//! |-----------|-------|
//! | CommandTextExtractor | Pipes the document to an external OCR program |
//! | NullTextExtractor | Never finds text |

pub mod command;
pub mod null;

pub use command::CommandTextExtractor;
pub use null::NullTextExtractor;
