//! Text extraction configuration types

use fanmatch_application::ports::registry::TextExtractorConfig;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EXTRACTION_PROVIDER, DEFAULT_EXTRACTION_TIMEOUT_SECS, EXTRACTION_PROVIDER_NONE,
};

/// Identity document text extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Registered extractor name (`command`, `null`), or `none`
    pub provider: String,

    /// External program for the `command` extractor
    pub program: Option<String>,

    /// Arguments passed to `program`
    pub args: Vec<String>,

    /// Extraction timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EXTRACTION_PROVIDER.to_string(),
            program: None,
            args: Vec::new(),
            timeout_secs: DEFAULT_EXTRACTION_TIMEOUT_SECS,
        }
    }
}

impl ExtractionConfig {
    /// Whether an extractor should be resolved at all
    pub fn is_enabled(&self) -> bool {
        let provider = self.provider.trim();
        !provider.is_empty() && !provider.eq_ignore_ascii_case(EXTRACTION_PROVIDER_NONE)
    }

    /// Registry configuration for resolving the extractor
    pub fn to_extractor_config(&self) -> TextExtractorConfig {
        let config =
            TextExtractorConfig::new(self.provider.trim()).with_timeout_secs(self.timeout_secs);
        match &self.program {
            Some(program) => config.with_command(program, self.args.clone()),
            None => config,
        }
    }
}
