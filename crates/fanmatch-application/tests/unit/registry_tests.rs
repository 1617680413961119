//! Tests for provider registries populated by fanmatch-providers

use fanmatch_application::ports::registry::{
    EmbeddingProviderConfig, ProfileStoreConfig, TextExtractorConfig, list_embedding_providers,
    list_profile_stores, list_text_extractors, resolve_embedding_provider, resolve_profile_store,
    resolve_text_extractor,
};

#[test]
fn test_null_embedding_provider_is_registered() {
    let names: Vec<&str> = list_embedding_providers().iter().map(|(n, _)| *n).collect();
    assert!(names.contains(&"null"), "registered: {names:?}");

    let provider = resolve_embedding_provider(&EmbeddingProviderConfig::new("null")).unwrap();
    assert_eq!(provider.provider_name(), "null");
    assert!(provider.dimensions() > 0);
}

#[test]
fn test_memory_store_is_registered() {
    let names: Vec<&str> = list_profile_stores().iter().map(|(n, _)| *n).collect();
    assert!(names.contains(&"memory"));
    assert!(names.contains(&"firebase"));

    let store = resolve_profile_store(&ProfileStoreConfig::new("memory")).unwrap();
    assert_eq!(store.provider_name(), "memory");
}

#[test]
fn test_text_extractors_are_registered() {
    let names: Vec<&str> = list_text_extractors().iter().map(|(n, _)| *n).collect();
    assert!(names.contains(&"null"));
    assert!(names.contains(&"command"));

    let extractor = resolve_text_extractor(&TextExtractorConfig::new("null")).unwrap();
    assert_eq!(extractor.extractor_name(), "null");
}

#[test]
fn test_command_extractor_requires_program() {
    let err = resolve_text_extractor(&TextExtractorConfig::new("command"))
        .err()
        .expect("program is required");
    assert!(err.contains("program"));
}

#[test]
fn test_firebase_store_requires_database_url() {
    let err = resolve_profile_store(&ProfileStoreConfig::new("firebase"))
        .err()
        .expect("database_url is required");
    assert!(err.contains("database_url"));
}
