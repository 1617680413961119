//! Unit tests for catalog value objects

use fanmatch_domain::constants::DESCRIPTION_UNAVAILABLE;
use fanmatch_domain::{Affinity, Catalog, CatalogEntry, MatchResult};

#[test]
fn test_catalog_deserializes_from_name_text_embedding_array() {
    let json = r#"[
        {"name": "A", "text": "aggressive rifler", "embedding": [1.0, 0.0]},
        {"name": "B", "text": "calm support", "embedding": [0.0, 1.0]}
    ]"#;

    let catalog: Catalog = serde_json::from_str(json).expect("valid catalog");

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entries()[0].name, "A");
    assert_eq!(catalog.entries()[0].description, "aggressive rifler");
    assert_eq!(catalog.entries()[1].embedding, vec![0.0, 1.0]);
    assert_eq!(catalog.dimensions(), Some(2));
}

#[test]
fn test_catalog_serializes_as_bare_array() {
    let catalog = Catalog::new(vec![CatalogEntry::new("A", "desc", vec![0.5])]);

    let value = serde_json::to_value(&catalog).expect("serializable");

    let array = value.as_array().expect("catalog must be an array");
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["name"], "A");
    assert_eq!(array[0]["text"], "desc");
    assert!(array[0].get("description").is_none());
}

#[test]
fn test_entry_without_embedding_field_defaults_to_empty() {
    let json = r#"[{"name": "A", "text": "no vector"}]"#;

    let catalog: Catalog = serde_json::from_str(json).expect("valid catalog");

    assert!(!catalog.entries()[0].has_embedding());
    assert_eq!(catalog.dimensions(), None);
}

#[test]
fn test_catalog_get_by_name() {
    let catalog = Catalog::from(vec![
        CatalogEntry::new("A", "first", vec![1.0]),
        CatalogEntry::new("B", "second", vec![0.0]),
    ]);

    assert_eq!(catalog.get("B").map(|e| e.description.as_str()), Some("second"));
    assert!(catalog.get("C").is_none());
}

#[test]
fn test_duplicate_names_are_reported_once() {
    let catalog = Catalog::from(vec![
        CatalogEntry::new("A", "first", vec![1.0]),
        CatalogEntry::new("B", "second", vec![0.0]),
        CatalogEntry::new("A", "again", vec![0.5]),
        CatalogEntry::new("A", "third", vec![0.2]),
    ]);

    assert_eq!(catalog.duplicate_names(), vec!["A"]);
    assert_eq!(catalog.get("A").map(|e| e.description.as_str()), Some("first"));
}

#[test]
fn test_match_result_falls_back_when_description_blank() {
    let entry = CatalogEntry::new("A", "   ", vec![1.0]);

    let result = MatchResult::from_entry(&entry, 0.5);

    assert_eq!(result.name, "A");
    assert_eq!(result.description, DESCRIPTION_UNAVAILABLE);
}

#[test]
fn test_match_result_percent_has_two_decimals() {
    let entry = CatalogEntry::new("A", "desc", vec![1.0]);

    assert_eq!(MatchResult::from_entry(&entry, 0.993_883).percent(), "99.39%");
    assert_eq!(MatchResult::from_entry(&entry, 0.0).percent(), "0.00%");
}

#[test]
fn test_affinity_thresholds_are_exclusive() {
    assert_eq!(Affinity::from_score(0.61), Affinity::High);
    assert_eq!(Affinity::from_score(0.6), Affinity::Medium);
    assert_eq!(Affinity::from_score(0.41), Affinity::Medium);
    assert_eq!(Affinity::from_score(0.4), Affinity::Low);
    assert_eq!(Affinity::from_score(-0.3), Affinity::Low);
}

#[test]
fn test_affinity_flames() {
    assert_eq!(Affinity::High.flames().chars().count(), 3);
    assert_eq!(Affinity::Medium.flames().chars().count(), 2);
    assert_eq!(Affinity::Low.flames().chars().count(), 1);
    assert_eq!(Affinity::High.to_string(), "high");
}
