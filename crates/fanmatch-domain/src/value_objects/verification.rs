//! Identity verification value objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of extracting text from an identity document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Text was extracted (lowercased)
    Success(String),
    /// The document was processed but yielded no text
    NoTextFound,
    /// The document could not be processed
    ProcessingError(String),
}

/// Outcome of the optional identity document check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// No document submitted
    #[default]
    Skipped,
    /// Both names were found in the document text
    Verified,
    /// Text was extracted but a name is missing from it
    NameNotFound,
    /// The extractor returned no usable text
    NoTextExtracted,
    /// The document could not be processed
    ProcessingError,
    /// No text extractor is available
    ExtractorUnavailable,
    /// Document or names were empty
    InvalidInput,
}

impl VerificationStatus {
    /// Whether the status reports a failure of the verification machinery
    pub fn is_error(self) -> bool {
        matches!(
            self,
            Self::ProcessingError | Self::ExtractorUnavailable | Self::InvalidInput
        )
    }

    /// Stable identifier stored in profile records
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::Verified => "verified",
            Self::NameNotFound => "name_not_found",
            Self::NoTextExtracted => "no_text_extracted",
            Self::ProcessingError => "processing_error",
            Self::ExtractorUnavailable => "extractor_unavailable",
            Self::InvalidInput => "invalid_input",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Skipped => "Verification skipped",
            Self::Verified => "Identity verified",
            Self::NameNotFound => "Name not found in the document",
            Self::NoTextExtracted => "No text could be extracted from the document",
            Self::ProcessingError => "Error while processing the document",
            Self::ExtractorUnavailable => "Text extraction is unavailable",
            Self::InvalidInput => "Invalid verification input",
        };
        f.write_str(message)
    }
}
