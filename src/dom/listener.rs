//! Owned DOM event subscription.
//!
//! Each controller keeps its listeners as values; dropping the controller
//! detaches every callback, so tearing the app down leaves no handlers
//! behind.

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsCast;
use web_sys::{Event, EventTarget};

/// A registered DOM event listener, detached on drop.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`.
    ///
    /// Handlers take the plain [`Event`]; downcast inside when a more
    /// specific type is needed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser rejects the registration.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, closure })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
