//! External command text extractor
//!
//! Runs a configured program (for example a script rendering PDF pages and
//! running OCR on them), writes the document to its stdin and reads the
//! recognised text from stdout.

use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use fanmatch_application::ports::registry::{
    TEXT_EXTRACTORS, TextExtractorConfig, TextExtractorEntry,
};
use fanmatch_domain::ExtractionOutcome;
use fanmatch_domain::ports::providers::TextExtractor;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::constants::EXTRACTION_DEFAULT_TIMEOUT_SECS;

/// Extracts text by piping documents through an external program
#[derive(Debug, Clone)]
pub struct CommandTextExtractor {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandTextExtractor {
    /// Create an extractor running `program` with `args`
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// Program being run
    pub fn program(&self) -> &str {
        &self.program
    }

    async fn run(&self, document: &[u8]) -> Result<std::process::Output, String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| format!("failed to start '{}': {e}", self.program))?;

        // stdout is drained while stdin is written, otherwise both pipes can fill up
        let stdin = child.stdin.take();
        let program = self.program.as_str();
        let write_document = async move {
            if let Some(mut stdin) = stdin {
                // A program that exits without reading stdin closes the pipe early
                if let Err(e) = stdin.write_all(document).await {
                    debug!(program = %program, error = %e, "stdin closed before the document was written");
                }
            }
        };

        let ((), output) = tokio::join!(write_document, child.wait_with_output());
        output.map_err(|e| format!("failed to wait for '{}': {e}", self.program))
    }
}

#[async_trait]
impl TextExtractor for CommandTextExtractor {
    async fn extract_text(&self, document: &[u8]) -> ExtractionOutcome {
        let output = match tokio::time::timeout(self.timeout, self.run(document)).await {
            Ok(Ok(output)) => output,
            Ok(Err(message)) => return ExtractionOutcome::ProcessingError(message),
            Err(_) => {
                warn!(program = %self.program, timeout = ?self.timeout, "Text extraction timed out");
                return ExtractionOutcome::ProcessingError(format!(
                    "'{}' timed out after {:?}",
                    self.program, self.timeout
                ));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return ExtractionOutcome::ProcessingError(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            ));
        }

        let text = String::from_utf8_lossy(&output.stdout).to_lowercase();
        if text.trim().is_empty() {
            ExtractionOutcome::NoTextFound
        } else {
            ExtractionOutcome::Success(text)
        }
    }

    fn extractor_name(&self) -> &str {
        "command"
    }
}

fn command_factory(
    config: &TextExtractorConfig,
) -> std::result::Result<Arc<dyn TextExtractor>, String> {
    let program = config
        .program
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| "Command extractor requires a program".to_string())?;
    let timeout_secs = if config.timeout_secs == 0 {
        EXTRACTION_DEFAULT_TIMEOUT_SECS
    } else {
        config.timeout_secs
    };

    Ok(Arc::new(CommandTextExtractor::new(
        program,
        config.args.clone(),
        Duration::from_secs(timeout_secs),
    )))
}

#[linkme::distributed_slice(TEXT_EXTRACTORS)]
static COMMAND_EXTRACTOR: TextExtractorEntry = TextExtractorEntry {
    name: "command",
    description: "External OCR program reading the document on stdin",
    factory: command_factory,
};
