//! Unit tests for Embedding value object

use fanmatch_domain::Embedding;

#[test]
fn test_embedding_creation_derives_dimensions() {
    let embedding = Embedding::new(vec![0.1, 0.2, 0.3, 0.4], "paraphrase-multilingual-mpnet-base-v2");

    assert_eq!(embedding.dimensions, 4);
    assert_eq!(embedding.model, "paraphrase-multilingual-mpnet-base-v2");
    assert!(!embedding.is_empty());
}

#[test]
fn test_empty_embedding() {
    let embedding = Embedding::new(Vec::new(), "null");

    assert!(embedding.is_empty());
    assert_eq!(embedding.dimensions, 0);
}

#[test]
fn test_into_vector_returns_values() {
    let vector = vec![0.25, -0.5];
    let embedding = Embedding::new(vector.clone(), "null");

    assert_eq!(embedding.into_vector(), vector);
}
