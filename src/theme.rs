//! Theme value type and initial-theme resolution.
//!
//! The page supports exactly two themes. The applied theme is resolved once
//! at load from the persisted preference, falling back to the OS-level
//! display preference, falling back to light. The applied theme is owned by
//! [`crate::dom::theme::ThemeController`]; this module only holds the
//! decision logic so it can be tested without a browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The light/dark visual mode applied to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light mode (the default when nothing else decides).
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

impl Theme {
    /// The string form persisted to the preference store and written to the
    /// `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted preference value. Anything other than the two known
    /// strings is treated as no preference.
    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn complement(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle controls while this theme is applied: the
    /// sun invites leaving dark mode, the moon invites entering it.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

/// Resolve the theme to apply at load.
///
/// A stored preference always wins. Without one, the OS-level preference
/// decides; when the sensor is unavailable the result is [`Theme::Light`].
#[must_use]
pub fn resolve_initial(stored: Option<Theme>, system_dark: Option<bool>) -> Theme {
    match (stored, system_dark) {
        (Some(theme), _) => theme,
        (None, Some(true)) => Theme::Dark,
        (None, _) => Theme::Light,
    }
}

/// Whether the controller should follow live OS preference changes.
///
/// True only when no explicit preference was stored at load time. The check
/// happens before the initial theme is applied (and possibly persisted), so
/// the first visit still subscribes.
#[must_use]
pub fn follows_system(stored: Option<Theme>) -> bool {
    stored.is_none()
}
