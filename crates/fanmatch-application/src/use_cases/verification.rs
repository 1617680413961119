//! Identity Verification Use Case
//!
//! Checks that both names of a fan appear in the text extracted from an
//! uploaded identity document. The document itself is never stored.

use std::sync::Arc;
use std::time::Instant;

use fanmatch_domain::{ExtractionOutcome, VerificationStatus};
use tracing::{info, warn};

use crate::ports::providers::TextExtractor;

/// Verifies identity documents with an optional text extractor
#[derive(Clone, Default)]
pub struct IdentityVerifier {
    extractor: Option<Arc<dyn TextExtractor>>,
}

impl IdentityVerifier {
    /// Create a verifier; `None` means no extractor is available
    pub fn new(extractor: Option<Arc<dyn TextExtractor>>) -> Self {
        Self { extractor }
    }

    /// Whether an extractor is configured
    pub fn is_available(&self) -> bool {
        self.extractor.is_some()
    }

    /// Verify `document` against the fan's names
    ///
    /// `None` means no document was submitted and yields `Skipped`.
    pub async fn verify(
        &self,
        document: Option<&[u8]>,
        first_name: &str,
        last_name: &str,
    ) -> VerificationStatus {
        let Some(document) = document else {
            return VerificationStatus::Skipped;
        };
        let Some(extractor) = &self.extractor else {
            warn!("Identity document submitted but no text extractor is configured");
            return VerificationStatus::ExtractorUnavailable;
        };

        let first = first_name.trim().to_lowercase();
        let last = last_name.trim().to_lowercase();
        if document.is_empty() || first.is_empty() || last.is_empty() {
            return VerificationStatus::InvalidInput;
        }

        let started = Instant::now();
        let outcome = extractor.extract_text(document).await;
        let status = match outcome {
            ExtractionOutcome::Success(text) if !text.trim().is_empty() => {
                let text = text.to_lowercase();
                if text.contains(&first) && text.contains(&last) {
                    VerificationStatus::Verified
                } else {
                    VerificationStatus::NameNotFound
                }
            }
            ExtractionOutcome::Success(_) | ExtractionOutcome::NoTextFound => {
                VerificationStatus::NoTextExtracted
            }
            ExtractionOutcome::ProcessingError(message) => {
                warn!(extractor = extractor.extractor_name(), error = %message, "Document processing failed");
                VerificationStatus::ProcessingError
            }
        };

        info!(
            extractor = extractor.extractor_name(),
            status = status.as_str(),
            bytes = document.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "Identity verification finished"
        );
        status
    }
}
