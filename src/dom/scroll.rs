//! Smooth scroll router for in-page fragment links.
//!
//! A document-level click listener intercepts anchors whose `href` is a
//! fragment reference, suppresses the browser's instant jump, closes the
//! mobile menu, animates the scroll, and pushes the fragment onto the
//! history. The animation is fire-and-forget; nothing awaits it.

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::JsCast;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::dom::listener::Listener;
use crate::dom::nav::NavHandle;
use crate::menu::MenuEvent;

/// Owns the fragment-link click interception.
pub struct ScrollRouter {
    _listener: Listener,
}

impl ScrollRouter {
    /// Install the document-level click interception.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the listener registration fails.
    pub fn mount(window: &Window, document: &Document, nav: NavHandle) -> Result<Self, JsValue> {
        let window = window.clone();
        let doc = document.clone();
        let listener = Listener::new(document.as_ref(), "click", move |event| {
            if let Err(err) = route(&window, &doc, &nav, &event) {
                log::error!("fragment navigation failed: {err:?}");
            }
        })?;
        Ok(Self { _listener: listener })
    }
}

/// Handle one document click; non-fragment clicks fall through untouched.
fn route(window: &Window, document: &Document, nav: &NavHandle, event: &Event) -> Result<(), JsValue> {
    let Some(target) = event.target() else { return Ok(()) };
    let Some(element) = target.dyn_ref::<Element>() else { return Ok(()) };
    let Some(anchor) = element.closest("a")? else { return Ok(()) };
    let Some(href) = anchor.get_attribute("href") else { return Ok(()) };
    if !href.starts_with('#') {
        return Ok(());
    }

    event.prevent_default();
    nav.borrow_mut().on_menu_event(MenuEvent::LinkClick)?;

    // A bare "#" or an unknown fragment skips the animation only; the menu
    // close above and the history update below still happen.
    if let Some(id) = href.strip_prefix('#') {
        if !id.is_empty() {
            if let Some(section) = document.get_element_by_id(id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }

    window.history()?.push_state_with_url(&JsValue::NULL, "", Some(&href))?;
    Ok(())
}
