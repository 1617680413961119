//! Unit tests for the persistence record

use chrono::{TimeZone, Utc};
use fanmatch_domain::{
    CatalogEntry, FanProfile, FavoriteGame, MatchResult, PrimaryRole, ProfileRecord,
    VerificationStatus,
};

fn profile() -> FanProfile {
    FanProfile {
        first_name: " Ana ".to_string(),
        last_name: "Souza".to_string(),
        city: "Recife".to_string(),
        favorite_game: FavoriteGame::LeagueOfLegends,
        primary_role: PrimaryRole::Mid,
        nickname: "anaxs".to_string(),
        playstyle: "Roams early ".to_string(),
        watched_championships: None,
        instagram_handle: None,
    }
}

#[test]
fn test_record_omits_absent_optional_fields() {
    let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let record =
        ProfileRecord::from_parts_at(&profile(), VerificationStatus::Skipped, None, created_at);

    let value = serde_json::to_value(&record).unwrap();
    let object = value.as_object().unwrap();

    assert!(!object.contains_key("watched_champs"));
    assert!(!object.contains_key("instagram_handle"));
    assert!(!object.contains_key("match_player_name"));
    assert!(!object.contains_key("match_score"));
    assert_eq!(object["verification_status"], "skipped");
    assert_eq!(object["created_at"], "2024-05-01T12:00:00Z");
}

#[test]
fn test_record_carries_match_and_trimmed_text() {
    let entry = CatalogEntry::new("Faker", "Legendary mid laner", vec![1.0]);
    let result = MatchResult::from_entry(&entry, 0.72);

    let record = ProfileRecord::from_parts(&profile(), VerificationStatus::Verified, Some(&result));

    assert_eq!(record.first_name, "Ana");
    assert_eq!(record.playstyle_desc, "Roams early");
    assert_eq!(record.fav_game.as_deref(), Some("League of Legends"));
    assert_eq!(record.role.as_deref(), Some("Mid"));
    assert_eq!(record.match_player_name.as_deref(), Some("Faker"));
    assert_eq!(record.match_score, Some(0.72));
}

#[test]
fn test_record_leaves_unset_selections_out() {
    let mut profile = profile();
    profile.favorite_game = FavoriteGame::Unset;
    profile.primary_role = PrimaryRole::Unset;

    let record = ProfileRecord::from_parts(&profile, VerificationStatus::Skipped, None);

    assert!(record.fav_game.is_none());
    assert!(record.role.is_none());
}
