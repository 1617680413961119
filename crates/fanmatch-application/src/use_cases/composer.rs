//! Text Composer
//!
//! Turns the structured answers of a fan into the single descriptive string
//! that gets embedded. Fragments are always emitted in the same order:
//! favourite game, primary role, playstyle.

use fanmatch_domain::FanProfile;
use fanmatch_domain::constants::{
    FRAGMENT_SEPARATOR, LABEL_FAVORITE_GAME, LABEL_PLAYSTYLE, LABEL_PRIMARY_ROLE,
};

/// Compose the embeddable profile text
///
/// Unset selections and blank text are left out. Returns an empty string when
/// nothing qualifies; callers treat that as insufficient text and skip
/// encoding.
///
/// ```rust
/// use fanmatch_application::use_cases::composer::compose;
/// use fanmatch_domain::FanProfile;
///
/// let profile = FanProfile {
///     playstyle: "Aggressive entry player".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(compose(&profile), "Playstyle: Aggressive entry player.");
/// assert_eq!(compose(&FanProfile::default()), "");
/// ```
pub fn compose(profile: &FanProfile) -> String {
    let mut fragments = Vec::with_capacity(3);

    if profile.favorite_game.is_set() {
        fragments.push(fragment(LABEL_FAVORITE_GAME, profile.favorite_game.label()));
    }
    if profile.primary_role.is_set() {
        fragments.push(fragment(LABEL_PRIMARY_ROLE, profile.primary_role.label()));
    }
    let playstyle = profile.playstyle.trim();
    if !playstyle.is_empty() {
        fragments.push(fragment(LABEL_PLAYSTYLE, playstyle));
    }

    fragments.join(FRAGMENT_SEPARATOR)
}

fn fragment(label: &str, value: &str) -> String {
    format!("{label}: {value}.")
}
