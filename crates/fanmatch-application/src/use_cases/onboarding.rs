//! Onboarding Use Case
//!
//! Completes a fan registration: validate, verify, match and save once.

use std::sync::Arc;

use fanmatch_domain::error::{Error, Result};
use fanmatch_domain::{FanProfile, ProfileRecord, VerificationStatus};
use tracing::{error, info};

use super::matching_service::{MatchOutcome, MatchingService};
use super::verification::IdentityVerifier;
use crate::ports::providers::ProfileStore;

/// Everything a fan submits
#[derive(Debug, Clone, Default)]
pub struct FanSubmission {
    /// Collected answers
    pub profile: FanProfile,
    /// Identity document bytes, if one was uploaded
    pub document: Option<Vec<u8>>,
}

/// What happened during onboarding
#[derive(Debug, Clone)]
pub struct OnboardingReport {
    /// Identity verification result
    pub verification: VerificationStatus,
    /// Matching result
    pub outcome: MatchOutcome,
    /// The record handed to the store
    pub record: ProfileRecord,
    /// Whether the store accepted the record
    pub saved: bool,
    /// Key assigned by the store
    pub record_key: Option<String>,
}

/// Orchestrates a complete registration
pub struct OnboardingService {
    verifier: IdentityVerifier,
    matching: Arc<MatchingService>,
    store: Arc<dyn ProfileStore>,
}

impl OnboardingService {
    /// Create the service from its collaborators
    pub fn new(
        verifier: IdentityVerifier,
        matching: Arc<MatchingService>,
        store: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            verifier,
            matching,
            store,
        }
    }

    /// Run the registration
    ///
    /// Fails only when the profile itself is invalid; verification, matching
    /// and persistence problems are reported in the returned report.
    pub async fn complete(&self, submission: &FanSubmission) -> Result<OnboardingReport> {
        let profile = &submission.profile;
        profile.validate()?;

        let verification = self
            .verifier
            .verify(
                submission.document.as_deref(),
                &profile.first_name,
                &profile.last_name,
            )
            .await;

        let matching = Arc::clone(&self.matching);
        let owned = profile.clone();
        let outcome = tokio::task::spawn_blocking(move || matching.match_profile(&owned))
            .await
            .map_err(|e| Error::internal(format!("Matching task failed: {e}")))?;

        let record = ProfileRecord::from_parts(profile, verification, outcome.result());
        let (saved, record_key) = match self.store.save_profile(&record).await {
            Ok(key) => {
                info!(store = self.store.provider_name(), key = %key, "Profile saved");
                (true, Some(key))
            }
            Err(e) => {
                error!(store = self.store.provider_name(), error = %e, "Failed to save profile");
                (false, None)
            }
        };

        Ok(OnboardingReport {
            verification,
            outcome,
            record,
            saved,
            record_key,
        })
    }
}
