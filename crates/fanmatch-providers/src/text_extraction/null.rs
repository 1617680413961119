//! Null text extractor

use std::sync::Arc;

use async_trait::async_trait;
use fanmatch_application::ports::registry::{
    TEXT_EXTRACTORS, TextExtractorConfig, TextExtractorEntry,
};
use fanmatch_domain::ExtractionOutcome;
use fanmatch_domain::ports::providers::TextExtractor;

/// Extractor that never finds any text
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTextExtractor;

impl NullTextExtractor {
    /// Create a new null extractor
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for NullTextExtractor {
    async fn extract_text(&self, _document: &[u8]) -> ExtractionOutcome {
        ExtractionOutcome::NoTextFound
    }

    fn extractor_name(&self) -> &str {
        "null"
    }
}

#[linkme::distributed_slice(TEXT_EXTRACTORS)]
static NULL_EXTRACTOR: TextExtractorEntry = TextExtractorEntry {
    name: "null",
    description: "Null extractor (always reports no text)",
    factory: |_config: &TextExtractorConfig| {
        let extractor: Arc<dyn TextExtractor> = Arc::new(NullTextExtractor::new());
        Ok(extractor)
    },
};
