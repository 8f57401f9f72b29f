//! Navigation controller: mobile menu, scrolled state, active link.
//!
//! Menu state lives in [`crate::menu::MenuState`] inside [`Nav`]; the DOM
//! classes are mirrored from it by a single setter and never read back. The
//! anchor map and section list are scanned once at mount — elements added to
//! the page later are not discovered.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::JsCast;
use web_sys::{Document, Element, KeyboardEvent, Node, Window};

use crate::dom::hooks;
use crate::dom::listener::Listener;
use crate::menu::{MenuEvent, MenuState};
use crate::navbar::{self, SectionRect};

/// Shared handle to the navigation core, used by the scroll router to close
/// the menu on fragment navigation.
pub type NavHandle = Rc<RefCell<Nav>>;

/// Navigation DOM handles plus the authoritative menu state.
pub struct Nav {
    links: Option<Element>,
    burger: Option<Element>,
    navbar: Option<Element>,
    /// Fragment id (without `#`) → nav anchor, built once at mount.
    anchors: Vec<(String, Element)>,
    /// Page sections in document order, scanned once at mount.
    sections: Vec<Element>,
    menu: MenuState,
}

impl Nav {
    /// Advance the menu state machine and mirror the result to the DOM.
    ///
    /// No-ops entirely when the menu or its trigger is missing, so the
    /// stored state never diverges from a page that cannot show it.
    pub fn on_menu_event(&mut self, event: MenuEvent) -> Result<(), JsValue> {
        if self.links.is_none() || self.burger.is_none() {
            return Ok(());
        }
        self.set_menu(self.menu.next(event))
    }

    /// Single authoritative setter for the menu state. Both class pairs on
    /// the menu and the trigger move in lock-step.
    fn set_menu(&mut self, next: MenuState) -> Result<(), JsValue> {
        self.menu = next;
        let (Some(links), Some(burger)) = (&self.links, &self.burger) else {
            return Ok(());
        };
        let open = next.is_open();
        for class in hooks::MENU_OPEN_CLASSES {
            links.class_list().toggle_with_force(class, open)?;
        }
        for class in hooks::TRIGGER_OPEN_CLASSES {
            burger.class_list().toggle_with_force(class, open)?;
        }
        Ok(())
    }

    /// Whether the menu is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Whether `node` sits inside the menu or its trigger.
    fn contains(&self, node: &Node) -> bool {
        let inside_links = self.links.as_ref().is_some_and(|el| el.contains(Some(node)));
        let inside_burger = self.burger.as_ref().is_some_and(|el| el.contains(Some(node)));
        inside_links || inside_burger
    }

    /// Mirror the scrolled threshold onto the navbar.
    fn sync_scrolled(&self, scroll_y: f64) -> Result<(), JsValue> {
        if let Some(navbar) = &self.navbar {
            navbar
                .class_list()
                .toggle_with_force(hooks::SCROLLED_CLASS, navbar::is_scrolled(scroll_y))?;
        }
        Ok(())
    }

    /// Snapshot section geometry and highlight the matching anchor.
    fn sync_active_link(&self) -> Result<(), JsValue> {
        if self.sections.is_empty() || self.anchors.is_empty() {
            return Ok(());
        }
        let rects: Vec<SectionRect> = self
            .sections
            .iter()
            .map(|section| {
                let rect = section.get_bounding_client_rect();
                SectionRect::new(section.id(), rect.top(), rect.bottom())
            })
            .collect();
        let current = navbar::active_section(&rects);

        for (id, anchor) in &self.anchors {
            let active = current == Some(id.as_str());
            anchor.class_list().toggle_with_force(hooks::ACTIVE_LINK_CLASS, active)?;
        }
        Ok(())
    }
}

/// Owns the navigation core and its event listeners.
pub struct NavController {
    nav: NavHandle,
    #[allow(dead_code)]
    listeners: Vec<Listener>,
}

impl NavController {
    /// Scan the page, apply the load-time scrolled/active state, and wire
    /// all navigation events.
    ///
    /// # Errors
    ///
    /// Returns `Err` when a selector query, DOM mutation, or listener
    /// registration fails during setup.
    pub fn mount(window: &Window, document: &Document) -> Result<Self, JsValue> {
        let links = document.query_selector(hooks::NAV_LINKS_SELECTOR)?;
        let burger = document.get_element_by_id(hooks::BURGER_ID);
        let navbar_el = document.query_selector(hooks::NAVBAR_SELECTOR)?;

        let anchors = match &links {
            Some(links) => scan_anchors(links)?,
            None => Vec::new(),
        };
        let sections = scan_sections(document)?;
        log::debug!("nav: {} anchors, {} sections", anchors.len(), sections.len());

        let nav = Nav {
            links: links.clone(),
            burger: burger.clone(),
            navbar: navbar_el,
            anchors,
            sections,
            menu: MenuState::Closed,
        };

        // Load-time state, before any event fires.
        nav.sync_scrolled(window.scroll_y().unwrap_or(0.0))?;
        nav.sync_active_link()?;

        let nav = Rc::new(RefCell::new(nav));
        let mut listeners = Vec::new();

        // Scrolled state + active link track every scroll.
        {
            let nav = Rc::clone(&nav);
            let window = window.clone();
            listeners.push(Listener::new(window.clone().as_ref(), "scroll", move |_event| {
                let nav = nav.borrow();
                let result = nav
                    .sync_scrolled(window.scroll_y().unwrap_or(0.0))
                    .and_then(|()| nav.sync_active_link());
                if let Err(err) = result {
                    log::error!("scroll sync failed: {err:?}");
                }
            })?);
        }

        // Active link also tracks resizes (section geometry moves).
        {
            let nav = Rc::clone(&nav);
            listeners.push(Listener::new(window.as_ref(), "resize", move |_event| {
                if let Err(err) = nav.borrow().sync_active_link() {
                    log::error!("resize sync failed: {err:?}");
                }
            })?);
        }

        // Burger toggles the menu.
        if let Some(burger) = &burger {
            let nav = Rc::clone(&nav);
            listeners.push(Listener::new(burger.as_ref(), "click", move |_event| {
                if let Err(err) = nav.borrow_mut().on_menu_event(MenuEvent::TriggerClick) {
                    log::error!("menu toggle failed: {err:?}");
                }
            })?);
        }

        // A tap on any anchor inside the menu closes it.
        if let Some(links) = &links {
            let nav = Rc::clone(&nav);
            listeners.push(Listener::new(links.as_ref(), "click", move |event| {
                let is_anchor = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .is_some_and(|el| el.tag_name() == "A");
                if is_anchor {
                    if let Err(err) = nav.borrow_mut().on_menu_event(MenuEvent::LinkClick) {
                        log::error!("menu close failed: {err:?}");
                    }
                }
            })?);
        }

        // A click outside both the menu and the trigger closes it.
        {
            let nav = Rc::clone(&nav);
            listeners.push(Listener::new(document.as_ref(), "click", move |event| {
                if !nav.borrow().is_open() {
                    return;
                }
                let inside = event
                    .target()
                    .and_then(|target| target.dyn_into::<Node>().ok())
                    .is_some_and(|node| nav.borrow().contains(&node));
                if !inside {
                    if let Err(err) = nav.borrow_mut().on_menu_event(MenuEvent::OutsideClick) {
                        log::error!("menu close failed: {err:?}");
                    }
                }
            })?);
        }

        // Escape closes from anywhere.
        {
            let nav = Rc::clone(&nav);
            listeners.push(Listener::new(document.as_ref(), "keydown", move |event| {
                let escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key_event| key_event.key() == "Escape");
                if escape {
                    if let Err(err) = nav.borrow_mut().on_menu_event(MenuEvent::Escape) {
                        log::error!("menu close failed: {err:?}");
                    }
                }
            })?);
        }

        Ok(Self { nav, listeners })
    }

    /// A shared handle to the navigation core.
    #[must_use]
    pub fn handle(&self) -> NavHandle {
        Rc::clone(&self.nav)
    }
}

/// Fragment anchors inside the nav, keyed by target id without the `#`.
fn scan_anchors(links: &Element) -> Result<Vec<(String, Element)>, JsValue> {
    let list = links.query_selector_all(hooks::FRAGMENT_ANCHOR_SELECTOR)?;
    let mut anchors = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        let Some(element) = list.get(index).and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let href = element.get_attribute("href");
        if let Some(id) = href.as_deref().and_then(|h| h.strip_prefix('#')) {
            anchors.push((id.to_owned(), element));
        }
    }
    Ok(anchors)
}

/// Page sections with an id, in document order.
fn scan_sections(document: &Document) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(hooks::SECTION_SELECTOR)?;
    let mut sections = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(element) = list.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            sections.push(element);
        }
    }
    Ok(sections)
}
