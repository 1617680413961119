//! Persistence record
//!
//! Flattened form of a completed onboarding, appended to the remote store.
//! Optional values that are absent are left out of the serialized record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::MatchResult;
use super::profile::FanProfile;
use super::verification::VerificationStatus;

/// Record written once per completed onboarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// City of residence
    pub city: String,
    /// Favourite game label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fav_game: Option<String>,
    /// Main nickname
    pub nickname: String,
    /// Primary role label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Free-text playstyle description
    pub playstyle_desc: String,
    /// Whether the fan watched a championship this year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watched_champs: Option<bool>,
    /// Instagram handle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_handle: Option<String>,
    /// Identity verification outcome
    pub verification_status: VerificationStatus,
    /// Creation time (UTC, RFC 3339)
    pub created_at: DateTime<Utc>,
    /// Name of the matched catalog entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_player_name: Option<String>,
    /// Cosine score of the match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
}

impl ProfileRecord {
    /// Assemble a record stamped with the current time
    pub fn from_parts(
        profile: &FanProfile,
        verification_status: VerificationStatus,
        match_result: Option<&MatchResult>,
    ) -> Self {
        Self::from_parts_at(profile, verification_status, match_result, Utc::now())
    }

    /// Assemble a record with an explicit creation time
    pub fn from_parts_at(
        profile: &FanProfile,
        verification_status: VerificationStatus,
        match_result: Option<&MatchResult>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            first_name: profile.first_name.trim().to_string(),
            last_name: profile.last_name.trim().to_string(),
            city: profile.city.trim().to_string(),
            fav_game: profile
                .favorite_game
                .is_set()
                .then(|| profile.favorite_game.label().to_string()),
            nickname: profile.nickname.trim().to_string(),
            role: profile
                .primary_role
                .is_set()
                .then(|| profile.primary_role.label().to_string()),
            playstyle_desc: profile.playstyle.trim().to_string(),
            watched_champs: profile.watched_championships,
            instagram_handle: profile.instagram().map(str::to_string),
            verification_status,
            created_at,
            match_player_name: match_result.map(|m| m.name.clone()),
            match_score: match_result.map(|m| m.score),
        }
    }
}
