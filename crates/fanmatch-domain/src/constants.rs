//! Domain layer constants
//!
//! Labels and placeholders that are part of the profile contract. The
//! placeholders are what an unfilled selection widget reports; the composer
//! must never treat them as content.

// ============================================================================
// PROFILE TEXT LABELS
// ============================================================================

/// Label of the favourite game fragment
pub const LABEL_FAVORITE_GAME: &str = "Favorite game";

/// Label of the primary role fragment
pub const LABEL_PRIMARY_ROLE: &str = "Primary role";

/// Label of the free-text playstyle fragment
pub const LABEL_PLAYSTYLE: &str = "Playstyle";

/// Separator placed between composed fragments
pub const FRAGMENT_SEPARATOR: &str = " ";

// ============================================================================
// SELECTION PLACEHOLDERS
// ============================================================================

/// Placeholder shown by the favourite game selector before a choice
pub const GAME_PLACEHOLDER: &str = "Selecione";

/// Placeholder shown by the role selector before a choice
pub const ROLE_PLACEHOLDER: &str = "Selecione uma role";

// ============================================================================
// MATCHING CONSTANTS
// ============================================================================

/// Score above which a match is graded as high affinity
pub const AFFINITY_HIGH_THRESHOLD: f64 = 0.6;

/// Score above which a match is graded as medium affinity
pub const AFFINITY_MEDIUM_THRESHOLD: f64 = 0.4;

/// Fallback description when a catalog entry has no text
pub const DESCRIPTION_UNAVAILABLE: &str = "Description not available.";
