//! Shared constants for the behavior layer.

// ── Navigation ──────────────────────────────────────────────────

/// Vertical scroll offset in CSS pixels above which the navbar is "scrolled".
/// The comparison is strict: exactly this offset still counts as top.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Distance of the active-section probe line from the viewport top, in CSS
/// pixels. Accounts for the fixed navbar height.
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 120.0;

// ── Theme ───────────────────────────────────────────────────────

/// localStorage key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query string for the OS-level dark preference.
pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";
