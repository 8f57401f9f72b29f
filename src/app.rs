//! Startup, controller ownership, and teardown.
//!
//! [`App`] is the single owner of every controller and, through them, every
//! event subscription. Dropping it detaches all listeners, so mount/unmount
//! cycles leave the page clean.

use std::cell::RefCell;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::dom;
use crate::dom::nav::NavController;
use crate::dom::scroll::ScrollRouter;
use crate::dom::theme::{ThemeController, ThemeOptions};
use crate::projects;

/// The mounted behavior layer.
pub struct App {
    theme: ThemeController,
    _nav: NavController,
    _router: ScrollRouter,
}

impl App {
    /// Wire every component against `document`.
    ///
    /// Components initialize independently; a missing optional element
    /// no-ops its feature. Only a document without a root or body element
    /// fails the mount.
    ///
    /// # Errors
    ///
    /// Returns `Err` when any controller fails its setup.
    pub fn mount(document: &Document) -> Result<Self, JsValue> {
        let window = dom::window()?;

        let theme = ThemeController::mount(&window, document, ThemeOptions::default())?;
        let nav = NavController::mount(&window, document)?;
        let router = ScrollRouter::mount(&window, document, nav.handle())?;

        dom::grid::render(document, &projects::projects())?;
        dom::set_year(document);

        log::info!(
            "mounted: theme {} ({} toggles)",
            theme.current().as_str(),
            theme.toggle_count()
        );
        Ok(Self { theme, _nav: nav, _router: router })
    }

    /// The theme controller, exposed for host-page integration.
    #[must_use]
    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Wasm entry point: mounts the behavior layer and parks it for the page
/// lifetime.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let document = dom::window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let app = App::mount(&document)?;
    APP.with(|slot| {
        *slot.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Tear the behavior layer down, detaching every listener. Safe to call
/// when nothing is mounted.
#[wasm_bindgen]
pub fn unmount() {
    APP.with(|slot| {
        slot.borrow_mut().take();
    });
}
