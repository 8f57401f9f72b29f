//! System light/dark preference sensor.
//!
//! Wraps `matchMedia("(prefers-color-scheme: dark)")`. Change notifications
//! must work on hosts exposing either the modern `addEventListener` shape or
//! only the legacy `addListener` one; the registration path is picked at
//! runtime. The handler re-reads `matches()` instead of trusting the event
//! payload, which keeps both shapes on one code path.

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsCast;
use web_sys::{Event, MediaQueryList, Window};

use crate::consts::DARK_MEDIA_QUERY;

/// The dark-preference media query, when the host supports `matchMedia`.
#[must_use]
pub fn query(window: &Window) -> Option<MediaQueryList> {
    window.match_media(DARK_MEDIA_QUERY).ok().flatten()
}

/// Whether the OS currently prefers dark. `None` when the sensor is
/// unavailable.
#[must_use]
pub fn prefers_dark(window: &Window) -> Option<bool> {
    query(window).map(|mql| mql.matches())
}

/// Which registration shape the host offered.
enum Shape {
    Modern,
    Legacy,
}

/// A live change subscription on the media query, detached on drop.
pub struct Subscription {
    mql: MediaQueryList,
    closure: Closure<dyn FnMut(Event)>,
    shape: Shape,
}

/// Subscribe to preference changes; `on_change` receives the new dark flag.
///
/// # Errors
///
/// Returns `Err` if the host rejects the listener registration.
pub fn subscribe(
    mql: MediaQueryList,
    mut on_change: impl FnMut(bool) + 'static,
) -> Result<Subscription, JsValue> {
    let probe = mql.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        on_change(probe.matches());
    });

    let function: &js_sys::Function = closure.as_ref().unchecked_ref();
    let shape = if js_sys::Reflect::has(mql.as_ref(), &JsValue::from_str("addEventListener"))? {
        mql.add_event_listener_with_callback("change", function)?;
        Shape::Modern
    } else {
        mql.add_listener_with_opt_callback(Some(function))?;
        Shape::Legacy
    };

    Ok(Subscription { mql, closure, shape })
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let function: &js_sys::Function = self.closure.as_ref().unchecked_ref();
        let _ = match self.shape {
            Shape::Modern => self.mql.remove_event_listener_with_callback("change", function),
            Shape::Legacy => self.mql.remove_listener_with_opt_callback(Some(function)),
        };
    }
}
