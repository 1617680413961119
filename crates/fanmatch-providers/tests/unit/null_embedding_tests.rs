//! Tests for the null embedding provider

use fanmatch_application::ports::registry::{EmbeddingProviderConfig, resolve_embedding_provider};
use fanmatch_providers::EmbeddingProvider;
use fanmatch_providers::embedding::NullEmbeddingProvider;

#[test]
fn test_same_text_same_vector() {
    let provider = NullEmbeddingProvider::new();

    let a = provider.embed("Playstyle: calm.").unwrap();
    let b = provider.embed("Playstyle: calm.").unwrap();

    assert_eq!(a, b);
    assert_eq!(a.dimensions, provider.dimensions());
}

#[test]
fn test_different_texts_differ() {
    let provider = NullEmbeddingProvider::new();

    let a = provider.embed("Playstyle: calm.").unwrap();
    let b = provider.embed("Playstyle: aggressive.").unwrap();

    assert_ne!(a.vector, b.vector);
}

#[test]
fn test_values_are_bounded() {
    let provider = NullEmbeddingProvider::with_dimensions(64);

    let embedding = provider.embed("anything").unwrap();

    assert_eq!(embedding.vector.len(), 64);
    assert!(embedding.vector.iter().all(|v| (-1.0..=1.0).contains(v)));
}

#[test]
fn test_batch_preserves_order() {
    let provider = NullEmbeddingProvider::new();
    let texts = vec!["one".to_string(), "two".to_string()];

    let batch = provider.embed_batch(&texts).unwrap();

    assert_eq!(batch.len(), 2);
    assert_eq!(batch[1], provider.embed("two").unwrap());
}

#[test]
fn test_registry_factory_honours_dimensions() {
    let provider =
        resolve_embedding_provider(&EmbeddingProviderConfig::new("null").with_dimensions(8))
            .unwrap();

    assert_eq!(provider.dimensions(), 8);
    assert!(provider.health_check().is_ok());
}
