//! Fan profile value objects
//!
//! Selections carry an explicit `Unset` variant standing for the placeholder
//! a selection widget shows before the fan picks anything. Parsing the
//! placeholder text yields `Unset`, never a real value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{GAME_PLACEHOLDER, ROLE_PLACEHOLDER};
use crate::error::{Error, Result};

/// Favourite game selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FavoriteGame {
    /// No game selected yet
    #[default]
    #[serde(rename = "Selecione")]
    Unset,
    /// Counter-Strike
    #[serde(rename = "Counter-Strike")]
    CounterStrike,
    /// League of Legends
    #[serde(rename = "League of Legends")]
    LeagueOfLegends,
}

impl FavoriteGame {
    /// Games a fan can pick, in display order
    pub const ALL: [FavoriteGame; 2] = [FavoriteGame::CounterStrike, FavoriteGame::LeagueOfLegends];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Unset => GAME_PLACEHOLDER,
            Self::CounterStrike => "Counter-Strike",
            Self::LeagueOfLegends => "League of Legends",
        }
    }

    /// Whether a real game was selected
    pub fn is_set(self) -> bool {
        self != Self::Unset
    }

    /// Roles that can be picked for this game
    pub fn roles(self) -> &'static [PrimaryRole] {
        match self {
            Self::Unset => &[],
            Self::CounterStrike => &[
                PrimaryRole::EntryFragger,
                PrimaryRole::Support,
                PrimaryRole::AwPer,
                PrimaryRole::Igl,
                PrimaryRole::Lurker,
            ],
            Self::LeagueOfLegends => &[
                PrimaryRole::Top,
                PrimaryRole::Jungle,
                PrimaryRole::Mid,
                PrimaryRole::Adc,
                PrimaryRole::Support,
            ],
        }
    }
}

impl fmt::Display for FavoriteGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FavoriteGame {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(GAME_PLACEHOLDER) {
            return Ok(Self::Unset);
        }
        match value.to_lowercase().as_str() {
            "counter-strike" | "counter strike" | "cs" | "cs2" => Ok(Self::CounterStrike),
            "league of legends" | "lol" => Ok(Self::LeagueOfLegends),
            _ => Err(Error::invalid_argument(format!("Unknown game: {value}"))),
        }
    }
}

/// Primary role selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryRole {
    /// No role selected yet
    #[default]
    #[serde(rename = "Selecione uma role")]
    Unset,
    /// Counter-Strike entry fragger
    #[serde(rename = "Entry Fragger")]
    EntryFragger,
    /// Support player (both games)
    #[serde(rename = "Support")]
    Support,
    /// Counter-Strike AWPer
    #[serde(rename = "AWPer")]
    AwPer,
    /// Counter-Strike in-game leader
    #[serde(rename = "IGL")]
    Igl,
    /// Counter-Strike lurker
    #[serde(rename = "Lurker")]
    Lurker,
    /// League of Legends top laner
    #[serde(rename = "Top")]
    Top,
    /// League of Legends jungler
    #[serde(rename = "Jungle")]
    Jungle,
    /// League of Legends mid laner
    #[serde(rename = "Mid")]
    Mid,
    /// League of Legends bot carry
    #[serde(rename = "ADC")]
    Adc,
}

impl PrimaryRole {
    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Unset => ROLE_PLACEHOLDER,
            Self::EntryFragger => "Entry Fragger",
            Self::Support => "Support",
            Self::AwPer => "AWPer",
            Self::Igl => "IGL",
            Self::Lurker => "Lurker",
            Self::Top => "Top",
            Self::Jungle => "Jungle",
            Self::Mid => "Mid",
            Self::Adc => "ADC",
        }
    }

    /// Whether a real role was selected
    pub fn is_set(self) -> bool {
        self != Self::Unset
    }
}

impl fmt::Display for PrimaryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PrimaryRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ROLE_PLACEHOLDER) {
            return Ok(Self::Unset);
        }
        match value.to_lowercase().as_str() {
            "entry fragger" | "entry" => Ok(Self::EntryFragger),
            "support" | "suporte" => Ok(Self::Support),
            "awper" | "awp" => Ok(Self::AwPer),
            "igl" => Ok(Self::Igl),
            "lurker" => Ok(Self::Lurker),
            "top" => Ok(Self::Top),
            "jungle" => Ok(Self::Jungle),
            "mid" => Ok(Self::Mid),
            "adc" => Ok(Self::Adc),
            _ => Err(Error::invalid_argument(format!("Unknown role: {value}"))),
        }
    }
}

/// Answers collected from a fan
///
/// Text fields are free-form; an empty (or whitespace-only) value means the
/// field was left blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FanProfile {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// City of residence
    pub city: String,
    /// Favourite game
    pub favorite_game: FavoriteGame,
    /// Primary role in the favourite game
    pub primary_role: PrimaryRole,
    /// Main in-game nickname
    pub nickname: String,
    /// Free-text description of how the fan plays
    pub playstyle: String,
    /// Whether the fan watched an esports championship this year
    pub watched_championships: Option<bool>,
    /// Instagram handle
    pub instagram_handle: Option<String>,
}

impl FanProfile {
    /// Required basic-data fields that are still blank
    pub fn missing_basic_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.first_name) {
            missing.push("first_name");
        }
        if is_blank(&self.last_name) {
            missing.push("last_name");
        }
        if is_blank(&self.city) {
            missing.push("city");
        }
        if !self.favorite_game.is_set() {
            missing.push("favorite_game");
        }
        if !self.primary_role.is_set() {
            missing.push("primary_role");
        }
        if is_blank(&self.nickname) {
            missing.push("nickname");
        }
        missing
    }

    /// Required interest fields that are still blank
    pub fn missing_interest_fields(&self) -> Vec<&'static str> {
        if is_blank(&self.playstyle) {
            vec!["playstyle"]
        } else {
            Vec::new()
        }
    }

    /// Check that every required field is filled and the role fits the game
    pub fn validate(&self) -> Result<()> {
        let mut missing = self.missing_basic_fields();
        missing.extend(self.missing_interest_fields());
        if !missing.is_empty() {
            return Err(Error::invalid_argument(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }
        if !self.favorite_game.roles().contains(&self.primary_role) {
            return Err(Error::invalid_argument(format!(
                "Role '{}' is not available for {}",
                self.primary_role, self.favorite_game
            )));
        }
        Ok(())
    }

    /// Instagram handle, if one was given
    pub fn instagram(&self) -> Option<&str> {
        self.instagram_handle
            .as_deref()
            .map(str::trim)
            .filter(|handle| !handle.is_empty())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
