//! Browser adapters and controllers.
//!
//! This is the only module tree that touches `web-sys`. Every DOM
//! collaborator is optional: a missing element degrades to a silent no-op
//! for that feature, never an error. Fallible browser calls propagate
//! `Result<_, JsValue>` with `?` up to the mount path; inside event handlers
//! failures are logged instead, since there is nowhere left to propagate.
//!
//! | Module | Role |
//! |--------|------|
//! | [`hooks`] | The ids/classes this crate expects in the page markup |
//! | [`listener`] | Owned DOM event subscription with detach-on-drop |
//! | [`prefs`] | Preference store adapter (`localStorage`) |
//! | [`media`] | System light/dark preference sensor (`matchMedia`) |
//! | [`theme`] | Theme controller |
//! | [`nav`] | Navigation controller (menu, scrolled state, active link) |
//! | [`scroll`] | Smooth scroll router for fragment links |
//! | [`grid`] | Project card grid renderer |

pub mod grid;
pub mod hooks;
pub mod listener;
pub mod media;
pub mod nav;
pub mod prefs;
pub mod scroll;
pub mod theme;

use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// The browser window. Errors outside a browser environment.
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window: not running in a browser"))
}

/// Write the current year into the footer year element, when present.
pub fn set_year(document: &Document) {
    if let Some(el) = document.get_element_by_id(hooks::YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
