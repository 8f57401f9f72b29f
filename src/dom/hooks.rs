//! The DOM structure contract: ids and classes this crate expects to find in
//! the page markup. Everything here is optional at runtime — absence of an
//! element no-ops the feature that uses it.

// ── Element ids ─────────────────────────────────────────────────

/// Desktop theme toggle button.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Theme toggle button inside the mobile menu.
pub const MOBILE_THEME_TOGGLE_ID: &str = "mobile-theme-toggle";

/// Burger trigger for the mobile menu.
pub const BURGER_ID: &str = "burger";

/// Footer element receiving the current year.
pub const YEAR_ID: &str = "year";

/// Container the project cards are appended to.
pub const PROJECT_GRID_ID: &str = "projectGrid";

// ── Selectors ───────────────────────────────────────────────────

/// The navigation links container.
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";

/// The navbar itself (scrolled-state styling).
pub const NAVBAR_SELECTOR: &str = ".navbar";

/// Anchors inside the nav that target page fragments.
pub const FRAGMENT_ANCHOR_SELECTOR: &str = "a[href^='#']";

/// Page sections eligible for active-link highlighting.
pub const SECTION_SELECTOR: &str = "section[id]";

// ── State classes ───────────────────────────────────────────────

/// `data-theme` attribute on the root element.
pub const THEME_ATTR: &str = "data-theme";

/// Legacy dark-mode class on `<body>`, kept for older stylesheets.
pub const LEGACY_DARK_CLASS: &str = "dark";

/// Class on the nav links container while dark mode is NOT applied.
pub const NAV_LIGHT_CLASS: &str = "light";

/// Navbar class past the scroll threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Class on the anchor for the section currently in view.
pub const ACTIVE_LINK_CLASS: &str = "active";

/// Open-menu classes on the links container. Two stylesheets' conventions
/// are supported; both classes must always move together.
pub const MENU_OPEN_CLASSES: [&str; 2] = ["open", "show"];

/// Open-menu classes on the burger trigger. Same lock-step rule.
pub const TRIGGER_OPEN_CLASSES: [&str; 2] = ["open", "active"];
