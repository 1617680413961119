//! Tests for the onboarding flow

use std::sync::Arc;

use async_trait::async_trait;
use fanmatch_application::ports::{EmbeddingProvider, ProfileStore};
use fanmatch_application::ports::registry::EmbeddingProviderConfig;
use fanmatch_application::use_cases::{
    CatalogLoader, EmbeddingModelCache, FanSubmission, IdentityVerifier, MatchOutcome,
    MatchingService, OnboardingService,
};
use fanmatch_domain::error::{Error, Result};
use fanmatch_domain::{ProfileRecord, VerificationStatus};
use fanmatch_providers::profile_store::InMemoryProfileStore;
use tempfile::TempDir;

use crate::test_utils::{FixedEmbeddingProvider, complete_profile, write_two_entry_catalog};

/// Store that rejects every write
struct FailingStore;

#[async_trait]
impl ProfileStore for FailingStore {
    async fn save_profile(&self, _record: &ProfileRecord) -> Result<String> {
        Err(Error::storage("database offline"))
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

fn matching(dir: &TempDir) -> Arc<MatchingService> {
    let catalog_path = dir.path().join("players_vectors.json");
    write_two_entry_catalog(&catalog_path);
    let models = Arc::new(EmbeddingModelCache::new());
    let provider: Arc<dyn EmbeddingProvider> =
        Arc::new(FixedEmbeddingProvider::new().with_fallback(vec![0.1, 0.9]));
    models.load_with("fixed:", || Ok(provider)).unwrap();

    Arc::new(MatchingService::new(
        models,
        EmbeddingProviderConfig::new("fixed"),
        Arc::new(CatalogLoader::new()),
        catalog_path,
    ))
}

#[tokio::test]
async fn test_complete_registration_is_saved_with_match() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(InMemoryProfileStore::new());
    let service = OnboardingService::new(IdentityVerifier::new(None), matching(&dir), store.clone());
    let submission = FanSubmission {
        profile: complete_profile(),
        document: None,
    };

    let report = service.complete(&submission).await.expect("valid profile");

    assert!(report.saved);
    assert_eq!(report.verification, VerificationStatus::Skipped);
    assert!(matches!(&report.outcome, MatchOutcome::Matched(m) if m.name == "B"));

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(Some(&records[0].0), report.record_key.as_ref());
    assert_eq!(records[0].1.match_player_name.as_deref(), Some("B"));
    assert_eq!(records[0].1.fav_game.as_deref(), Some("Counter-Strike"));
}

#[tokio::test]
async fn test_invalid_profile_is_rejected_before_saving() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(InMemoryProfileStore::new());
    let service = OnboardingService::new(IdentityVerifier::new(None), matching(&dir), store.clone());
    let mut profile = complete_profile();
    profile.nickname.clear();

    let result = service
        .complete(&FanSubmission {
            profile,
            document: None,
        })
        .await;

    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn test_store_failure_is_reported_not_raised() {
    let dir = TempDir::new().unwrap();
    let service =
        OnboardingService::new(IdentityVerifier::new(None), matching(&dir), Arc::new(FailingStore));

    let report = service
        .complete(&FanSubmission {
            profile: complete_profile(),
            document: None,
        })
        .await
        .expect("store failures do not fail onboarding");

    assert!(!report.saved);
    assert!(report.record_key.is_none());
    assert_eq!(report.record.match_player_name.as_deref(), Some("B"));
}

#[tokio::test]
async fn test_document_without_extractor_is_still_saved() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(InMemoryProfileStore::new());
    let service = OnboardingService::new(IdentityVerifier::new(None), matching(&dir), store.clone());

    let report = service
        .complete(&FanSubmission {
            profile: complete_profile(),
            document: Some(b"%PDF".to_vec()),
        })
        .await
        .unwrap();

    assert_eq!(report.verification, VerificationStatus::ExtractorUnavailable);
    assert_eq!(
        store.records()[0].1.verification_status,
        VerificationStatus::ExtractorUnavailable
    );
}
