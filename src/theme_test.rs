use super::*;

// =============================================================
// Theme string forms
// =============================================================

#[test]
fn as_str_round_trips() {
    assert_eq!(Theme::from_str(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::from_str(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn from_str_rejects_unknown_values() {
    assert_eq!(Theme::from_str(""), None);
    assert_eq!(Theme::from_str("Dark"), None);
    assert_eq!(Theme::from_str("auto"), None);
}

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

// =============================================================
// Complement
// =============================================================

#[test]
fn complement_is_an_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.complement().complement(), theme);
    }
}

#[test]
fn complement_swaps_variants() {
    assert_eq!(Theme::Light.complement(), Theme::Dark);
    assert_eq!(Theme::Dark.complement(), Theme::Light);
}

// =============================================================
// Glyphs
// =============================================================

#[test]
fn dark_shows_sun_glyph() {
    assert_eq!(Theme::Dark.glyph(), "☀️");
}

#[test]
fn light_shows_moon_glyph() {
    assert_eq!(Theme::Light.glyph(), "🌙");
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn stored_preference_wins_over_system() {
    assert_eq!(resolve_initial(Some(Theme::Light), Some(true)), Theme::Light);
    assert_eq!(resolve_initial(Some(Theme::Dark), Some(false)), Theme::Dark);
}

#[test]
fn system_dark_applies_without_stored_preference() {
    assert_eq!(resolve_initial(None, Some(true)), Theme::Dark);
}

#[test]
fn system_light_applies_without_stored_preference() {
    assert_eq!(resolve_initial(None, Some(false)), Theme::Light);
}

#[test]
fn missing_sensor_defaults_to_light() {
    assert_eq!(resolve_initial(None, None), Theme::Light);
}

// =============================================================
// System-follow decision
// =============================================================

#[test]
fn follows_system_only_without_stored_preference() {
    assert!(follows_system(None));
    assert!(!follows_system(Some(Theme::Light)));
    assert!(!follows_system(Some(Theme::Dark)));
}
