//! Text Extractor Registry

use std::sync::Arc;

use crate::ports::providers::TextExtractor;

/// Configuration for text extractor creation
#[derive(Debug, Clone, Default)]
pub struct TextExtractorConfig {
    /// Extractor name (e.g., "command", "null")
    pub provider: String,
    /// External program the document is piped to
    pub program: Option<String>,
    /// Arguments passed to the program
    pub args: Vec<String>,
    /// Maximum run time in seconds
    pub timeout_secs: u64,
}

impl TextExtractorConfig {
    /// Create a new config with the given extractor name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            timeout_secs: 60,
            ..Default::default()
        }
    }

    /// Set the program and its arguments
    pub fn with_command(mut self, program: impl Into<String>, args: Vec<String>) -> Self {
        self.program = Some(program.into());
        self.args = args;
        self
    }

    /// Set the timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Registry entry for text extractors
pub struct TextExtractorEntry {
    /// Unique extractor name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create extractor instance
    pub factory: fn(&TextExtractorConfig) -> Result<Arc<dyn TextExtractor>, String>,
}

#[linkme::distributed_slice]
pub static TEXT_EXTRACTORS: [TextExtractorEntry] = [..];

/// Resolve text extractor by name from registry
pub fn resolve_text_extractor(
    config: &TextExtractorConfig,
) -> Result<Arc<dyn TextExtractor>, String> {
    let provider_name = &config.provider;

    if let Some(entry) = TEXT_EXTRACTORS.iter().find(|e| e.name == provider_name) {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = TEXT_EXTRACTORS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown text extractor '{provider_name}'. Available extractors: {available:?}"
    ))
}

/// List all registered text extractors
pub fn list_text_extractors() -> Vec<(&'static str, &'static str)> {
    TEXT_EXTRACTORS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
