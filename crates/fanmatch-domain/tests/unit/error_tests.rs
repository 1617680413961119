//! Unit tests for domain error types

use fanmatch_domain::Error;

#[test]
fn test_not_found_error() {
    let error = Error::not_found("catalog");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "catalog"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("Unknown game: chess");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "Unknown game: chess"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_embedding_error_display() {
    let error = Error::embedding("Model not available");
    assert_eq!(error.to_string(), "Embedding provider error: Model not available");
}

#[test]
fn test_storage_error_with_source() {
    let io = std::io::Error::other("connection reset");
    let error = Error::storage_with_source("Failed to save profile", io);

    match &error {
        Error::Storage { message, source } => {
            assert_eq!(message, "Failed to save profile");
            assert!(source.is_some());
        }
        _ => panic!("Expected Storage error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: Error = io.into();
    assert!(matches!(error, Error::IoSimple { .. }));
}

#[test]
fn test_json_error_conversion() {
    let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = parse.into();
    assert!(error.to_string().starts_with("JSON parsing error"));
}

#[test]
fn test_config_error() {
    let error = Error::config("storage.database_url is required");
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "storage.database_url is required");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
}
