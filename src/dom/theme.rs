//! Theme controller.
//!
//! Resolves the initial theme (stored preference → system preference →
//! light), applies it to the document, wires the toggle buttons, and — only
//! when no explicit preference was stored at load — follows live OS
//! preference changes.
//!
//! The applied theme is held here as the single authoritative state; the
//! document attributes and classes mirror it through [`Applied::apply`] and
//! are never read back to decide anything.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom::hooks;
use crate::dom::listener::Listener;
use crate::dom::media;
use crate::dom::prefs::PrefStore;
use crate::theme::{self, Theme};

/// Tunables for the controller.
pub struct ThemeOptions {
    /// Persist the initially resolved theme immediately, even though the
    /// user never chose it. This matches the site's observed behavior; note
    /// that the persisted value makes every later visit skip the
    /// system-preference subscription. Set false to keep following the OS
    /// until the user actually toggles.
    pub persist_initial: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self { persist_initial: true }
    }
}

/// Document handles plus the authoritative applied theme.
struct Applied {
    root: Element,
    body: HtmlElement,
    nav_links: Option<Element>,
    toggles: Vec<Element>,
    store: PrefStore,
    current: Theme,
}

impl Applied {
    /// Apply `theme` to the document and remember it. Idempotent.
    fn apply(&mut self, theme: Theme, persist: bool) -> Result<(), JsValue> {
        self.root.set_attribute(hooks::THEME_ATTR, theme.as_str())?;

        let dark = theme == Theme::Dark;
        self.body.class_list().toggle_with_force(hooks::LEGACY_DARK_CLASS, dark)?;

        // Inverted on purpose: the nav carries `light` whenever dark is NOT applied.
        if let Some(nav_links) = &self.nav_links {
            nav_links.class_list().toggle_with_force(hooks::NAV_LIGHT_CLASS, !dark)?;
        }

        for toggle in &self.toggles {
            toggle.set_text_content(Some(theme.glyph()));
        }

        if persist {
            self.store.set_theme(theme);
        }
        self.current = theme;
        Ok(())
    }

    /// Apply the complement of the current theme. User toggles always
    /// persist.
    fn toggle(&mut self) -> Result<(), JsValue> {
        self.apply(self.current.complement(), true)
    }
}

/// Owns the applied theme, the toggle listeners, and the optional
/// system-preference subscription.
pub struct ThemeController {
    applied: Rc<RefCell<Applied>>,
    listeners: Vec<Listener>,
    _system_watch: Option<media::Subscription>,
}

impl ThemeController {
    /// Resolve and apply the initial theme, then wire the toggle buttons.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the document has no root or body element, or when
    /// a DOM mutation or listener registration fails during setup.
    pub fn mount(
        window: &Window,
        document: &Document,
        options: ThemeOptions,
    ) -> Result<Self, JsValue> {
        let root = document
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root element"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let nav_links = document.query_selector(hooks::NAV_LINKS_SELECTOR)?;
        let toggles: Vec<Element> = [hooks::THEME_TOGGLE_ID, hooks::MOBILE_THEME_TOGGLE_ID]
            .iter()
            .filter_map(|id| document.get_element_by_id(id))
            .collect();

        let store = PrefStore::from_window(window);
        let stored = store.theme();
        let system_dark = media::prefers_dark(window);
        let initial = theme::resolve_initial(stored, system_dark);
        log::debug!("initial theme: {} (stored: {})", initial.as_str(), stored.is_some());

        let mut applied = Applied {
            root,
            body,
            nav_links,
            toggles: toggles.clone(),
            store,
            current: initial,
        };
        applied.apply(initial, options.persist_initial)?;
        let applied = Rc::new(RefCell::new(applied));

        let mut listeners = Vec::with_capacity(toggles.len());
        for toggle in &toggles {
            let applied = Rc::clone(&applied);
            listeners.push(Listener::new(toggle.as_ref(), "click", move |_event| {
                if let Err(err) = applied.borrow_mut().toggle() {
                    log::error!("theme toggle failed: {err:?}");
                }
            })?);
        }

        // Follow the OS only while the user has never chosen. The decision
        // uses the preference as it was BEFORE the initial apply above
        // possibly persisted it.
        let system_watch = if theme::follows_system(stored) {
            match media::query(window) {
                Some(mql) => {
                    let applied = Rc::clone(&applied);
                    Some(media::subscribe(mql, move |dark| {
                        let next = if dark { Theme::Dark } else { Theme::Light };
                        if let Err(err) = applied.borrow_mut().apply(next, true) {
                            log::error!("system theme change failed: {err:?}");
                        }
                    })?)
                }
                None => None,
            }
        } else {
            None
        };

        Ok(Self { applied, listeners, _system_watch: system_watch })
    }

    /// The currently applied theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.applied.borrow().current
    }

    /// How many toggle controls were found and wired.
    #[must_use]
    pub fn toggle_count(&self) -> usize {
        self.listeners.len()
    }
}
