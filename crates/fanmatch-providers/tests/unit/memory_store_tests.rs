//! Tests for the in-memory profile store

use chrono::Utc;
use fanmatch_domain::{FanProfile, ProfileRecord, VerificationStatus};
use fanmatch_providers::ProfileStore;
use fanmatch_providers::profile_store::InMemoryProfileStore;

fn record(nickname: &str) -> ProfileRecord {
    let profile = FanProfile {
        nickname: nickname.to_string(),
        ..Default::default()
    };
    ProfileRecord::from_parts_at(&profile, VerificationStatus::Skipped, None, Utc::now())
}

#[tokio::test]
async fn test_save_returns_distinct_keys() {
    let store = InMemoryProfileStore::new();

    let first = store.save_profile(&record("one")).await.unwrap();
    let second = store.save_profile(&record("two")).await.unwrap();

    assert_ne!(first, second);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_records_keep_insertion_order() {
    let store = InMemoryProfileStore::new();
    assert!(store.is_empty());

    for nickname in ["a", "b", "c"] {
        store.save_profile(&record(nickname)).await.unwrap();
    }

    let nicknames: Vec<String> = store
        .records()
        .into_iter()
        .map(|(_, r)| r.nickname)
        .collect();
    assert_eq!(nicknames, vec!["a", "b", "c"]);
}
