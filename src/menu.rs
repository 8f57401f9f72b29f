//! Mobile menu state machine.
//!
//! The menu is either open or closed; every way of closing it (tapping a
//! link, clicking elsewhere on the page, pressing Escape) funnels through the
//! same transition function. The DOM classes that style the open menu are
//! mirrored from this state by [`crate::dom::nav::NavController`], never the
//! other way around.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Menu hidden; the initial state.
    #[default]
    Closed,
    /// Menu visible.
    Open,
}

/// Events that drive the menu state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The burger trigger was clicked.
    TriggerClick,
    /// An anchor inside the menu was clicked.
    LinkClick,
    /// A click landed outside both the menu and its trigger.
    OutsideClick,
    /// The Escape key was pressed.
    Escape,
}

impl MenuState {
    /// Next state after `event`. Only the trigger toggles; everything else
    /// closes (a no-op when already closed).
    #[must_use]
    pub fn next(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::TriggerClick => match self {
                Self::Closed => Self::Open,
                Self::Open => Self::Closed,
            },
            MenuEvent::LinkClick | MenuEvent::OutsideClick | MenuEvent::Escape => Self::Closed,
        }
    }

    /// Whether the menu is currently open.
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}
