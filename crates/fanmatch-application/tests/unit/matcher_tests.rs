//! Tests for cosine similarity and best match selection

use fanmatch_application::use_cases::{
    MatchError, cosine_similarity, find_best_match, try_find_best_match,
};
use fanmatch_domain::CatalogEntry;

use crate::test_utils::two_entry_catalog;

#[test]
fn test_query_close_to_first_entry() {
    let result = find_best_match(&[0.9, 0.1], &two_entry_catalog()).expect("match");

    assert_eq!(result.name, "A");
    assert_eq!(result.description, "d1");
    assert!((result.score - 0.993_883_7).abs() < 1e-4, "score {}", result.score);
}

#[test]
fn test_zero_query_ties_on_first_entry() {
    let result = find_best_match(&[0.0, 0.0], &two_entry_catalog()).expect("match");

    assert_eq!(result.name, "A");
    assert_eq!(result.score, 0.0);
    assert!(!result.score.is_nan());
}

#[test]
fn test_empty_catalog_returns_none() {
    assert!(find_best_match(&[1.0, 0.0], &[]).is_none());
    assert_eq!(
        try_find_best_match(&[1.0, 0.0], &[]),
        Err(MatchError::EmptyCatalog)
    );
}

#[test]
fn test_ragged_catalog_returns_none() {
    let catalog = vec![
        CatalogEntry::new("A", "d1", vec![1.0, 0.0]),
        CatalogEntry::new("B", "d2", vec![0.0, 1.0, 0.0]),
    ];

    assert!(find_best_match(&[1.0, 0.0], &catalog).is_none());
    assert!(matches!(
        try_find_best_match(&[1.0, 0.0], &catalog),
        Err(MatchError::RaggedEmbeddings { ref name, expected: 2, found: 3 }) if name == "B"
    ));
}

#[test]
fn test_catalog_of_entries_without_embeddings_is_empty() {
    let catalog = vec![CatalogEntry::new("A", "d1", Vec::new())];

    assert_eq!(
        try_find_best_match(&[1.0], &catalog),
        Err(MatchError::EmptyCatalog)
    );
}

#[test]
fn test_entries_without_embeddings_are_skipped_not_shifted() {
    let catalog = vec![
        CatalogEntry::new("Empty", "no vector", Vec::new()),
        CatalogEntry::new("A", "d1", vec![0.0, 1.0]),
        CatalogEntry::new("B", "d2", vec![1.0, 0.0]),
    ];

    let result = find_best_match(&[1.0, 0.0], &catalog).expect("match");

    assert_eq!(result.name, "B");
    assert_eq!(result.description, "d2");
}

#[test]
fn test_query_dimension_mismatch_returns_none() {
    assert_eq!(
        try_find_best_match(&[1.0, 0.0, 0.0], &two_entry_catalog()),
        Err(MatchError::DimensionMismatch {
            query: 3,
            catalog: 2
        })
    );
    assert!(find_best_match(&[1.0, 0.0, 0.0], &two_entry_catalog()).is_none());
}

#[test]
fn test_empty_query_returns_none() {
    assert_eq!(
        try_find_best_match(&[], &two_entry_catalog()),
        Err(MatchError::EmptyQuery)
    );
}

#[test]
fn test_score_is_maximum_and_first_on_ties() {
    let catalog = vec![
        CatalogEntry::new("Low", "", vec![-1.0, 0.0]),
        CatalogEntry::new("Tie1", "", vec![1.0, 1.0]),
        CatalogEntry::new("Tie2", "", vec![2.0, 2.0]),
        CatalogEntry::new("Mid", "", vec![0.0, 1.0]),
    ];
    let query = [1.0, 1.0];

    let result = find_best_match(&query, &catalog).expect("match");
    let max = catalog
        .iter()
        .map(|e| cosine_similarity(&query, &e.embedding))
        .fold(f64::NEG_INFINITY, f64::max);

    assert_eq!(result.name, "Tie1");
    assert!((result.score - max).abs() < 1e-12);
}

#[test]
fn test_blank_description_uses_fallback_text() {
    let catalog = vec![CatalogEntry::new("A", "", vec![1.0])];

    let result = find_best_match(&[1.0], &catalog).expect("match");

    assert_eq!(result.description, "Description not available.");
}

#[test]
fn test_scores_stay_within_bounds() {
    let vectors: [&[f32]; 5] = [
        &[1.0, 2.0, 3.0],
        &[-3.0, 0.5, 2.0],
        &[1e-20, 1e-20, 1e-20],
        &[1e20, -1e20, 1e20],
        &[0.0, 0.0, 7.0],
    ];

    for a in vectors {
        for b in vectors {
            let score = cosine_similarity(a, b);
            assert!((-1.0..=1.0).contains(&score), "{a:?} vs {b:?} = {score}");
            assert!(!score.is_nan());
        }
        assert!((cosine_similarity(a, a) - 1.0).abs() < 1e-6, "{a:?}");
    }
}

#[test]
fn test_similarity_is_scale_invariant() {
    let a = [0.2, 0.7, -0.1];
    let b = [0.4, 1.4, -0.2];
    let c = [1.0, 0.0, 0.5];

    assert!((cosine_similarity(&a, &c) - cosine_similarity(&b, &c)).abs() < 1e-9);
    assert!((cosine_similarity(&a, &c) - cosine_similarity(&c, &a)).abs() < 1e-12);
}
