//! Behavior layer for a static portfolio page, compiled to WebAssembly.
//!
//! This crate owns everything the page does after load: resolving and
//! persisting the light/dark theme, the responsive navigation bar and its
//! mobile menu, smooth in-page scrolling with URL fragment updates,
//! scroll-driven active-link highlighting, and rendering the project card
//! grid. The page markup and styling stay in static HTML/CSS; this crate
//! only wires DOM events to DOM mutations.
//!
//! Decision logic is kept in pure modules with no browser dependency so it
//! can be unit-tested on the host. The [`dom`] tree is the only place that
//! touches `web-sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme value type and initial-theme resolution |
//! | [`menu`] | Mobile menu state machine |
//! | [`navbar`] | Scrolled-state threshold and active-section selection |
//! | [`projects`] | The project records rendered into the card grid |
//! | [`consts`] | Shared constants (thresholds, storage key, media query) |
//! | [`dom`] | Browser adapters and controllers (`web-sys`) |
//! | [`app`] | Startup, controller ownership, and teardown |

pub mod app;
pub mod consts;
pub mod dom;
pub mod menu;
pub mod navbar;
pub mod projects;
pub mod theme;
