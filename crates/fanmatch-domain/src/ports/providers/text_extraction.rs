use async_trait::async_trait;

use crate::value_objects::ExtractionOutcome;

/// Document Text Extraction Interface
///
/// Turns the raw bytes of an identity document into lowercase text. The
/// outcome is a value, not an error: failing to read a document is an
/// expected result the verifier reports back to the fan.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract lowercase text from the document bytes
    async fn extract_text(&self, document: &[u8]) -> ExtractionOutcome;

    /// Identifier of the extractor implementation
    fn extractor_name(&self) -> &str;
}
