//! Unit tests for verification statuses

use fanmatch_domain::VerificationStatus;

#[test]
fn test_default_status_is_skipped() {
    assert_eq!(VerificationStatus::default(), VerificationStatus::Skipped);
}

#[test]
fn test_error_statuses() {
    assert!(VerificationStatus::ProcessingError.is_error());
    assert!(VerificationStatus::ExtractorUnavailable.is_error());
    assert!(VerificationStatus::InvalidInput.is_error());
    assert!(!VerificationStatus::NameNotFound.is_error());
    assert!(!VerificationStatus::Verified.is_error());
}

#[test]
fn test_serde_matches_stable_identifiers() {
    for status in [
        VerificationStatus::Skipped,
        VerificationStatus::Verified,
        VerificationStatus::NameNotFound,
        VerificationStatus::NoTextExtracted,
        VerificationStatus::ProcessingError,
        VerificationStatus::ExtractorUnavailable,
        VerificationStatus::InvalidInput,
    ] {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.as_str()));
    }
}
