//! Tests for the external command text extractor

use std::time::Duration;

use fanmatch_domain::ExtractionOutcome;
use fanmatch_providers::TextExtractor;
use fanmatch_providers::text_extraction::CommandTextExtractor;

#[cfg(unix)]
fn sh(script: &str) -> CommandTextExtractor {
    CommandTextExtractor::new(
        "sh",
        vec!["-c".to_string(), script.to_string()],
        Duration::from_secs(5),
    )
}

#[cfg(unix)]
#[tokio::test]
async fn test_stdout_is_lowercased() {
    let outcome = CommandTextExtractor::new("cat", Vec::new(), Duration::from_secs(5))
        .extract_text(b"NOME: ANA SOUZA")
        .await;

    assert_eq!(outcome, ExtractionOutcome::Success("nome: ana souza".to_string()));
}

#[cfg(unix)]
#[tokio::test]
async fn test_large_document_streams_through() {
    let document = vec![b'A'; 1 << 20];

    let outcome = CommandTextExtractor::new("cat", Vec::new(), Duration::from_secs(10))
        .extract_text(&document)
        .await;

    match outcome {
        ExtractionOutcome::Success(text) => {
            assert_eq!(text.len(), 1 << 20);
            assert!(text.bytes().all(|b| b == b'a'));
        }
        other => panic!("expected the document text, got {other:?}"),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_empty_output_is_no_text() {
    let outcome = sh("cat > /dev/null").extract_text(b"%PDF").await;

    assert_eq!(outcome, ExtractionOutcome::NoTextFound);
}

#[cfg(unix)]
#[tokio::test]
async fn test_failing_program_is_processing_error() {
    let outcome = sh("echo 'cannot render' >&2; exit 3")
        .extract_text(b"%PDF")
        .await;

    match outcome {
        ExtractionOutcome::ProcessingError(message) => assert!(message.contains("cannot render")),
        other => panic!("expected a processing error, got {other:?}"),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_slow_program_times_out() {
    let extractor = CommandTextExtractor::new(
        "sh",
        vec!["-c".to_string(), "sleep 5".to_string()],
        Duration::from_millis(100),
    );

    let outcome = extractor.extract_text(b"%PDF").await;

    assert!(matches!(outcome, ExtractionOutcome::ProcessingError(m) if m.contains("timed out")));
}

#[tokio::test]
async fn test_missing_program_is_processing_error() {
    let outcome = CommandTextExtractor::new(
        "fanmatch-no-such-ocr-binary",
        Vec::new(),
        Duration::from_secs(1),
    )
    .extract_text(b"%PDF")
    .await;

    assert!(matches!(outcome, ExtractionOutcome::ProcessingError(m) if m.contains("failed to start")));
}
