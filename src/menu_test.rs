use super::*;

// =============================================================
// Initial state
// =============================================================

#[test]
fn menu_starts_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
    assert!(!MenuState::default().is_open());
}

// =============================================================
// Trigger toggling
// =============================================================

#[test]
fn trigger_click_opens_closed_menu() {
    assert_eq!(MenuState::Closed.next(MenuEvent::TriggerClick), MenuState::Open);
}

#[test]
fn trigger_click_closes_open_menu() {
    assert_eq!(MenuState::Open.next(MenuEvent::TriggerClick), MenuState::Closed);
}

#[test]
fn double_trigger_click_returns_to_start() {
    for start in [MenuState::Closed, MenuState::Open] {
        let end = start.next(MenuEvent::TriggerClick).next(MenuEvent::TriggerClick);
        assert_eq!(end, start);
    }
}

// =============================================================
// Close paths
// =============================================================

#[test]
fn link_click_closes_open_menu() {
    assert_eq!(MenuState::Open.next(MenuEvent::LinkClick), MenuState::Closed);
}

#[test]
fn outside_click_closes_open_menu() {
    assert_eq!(MenuState::Open.next(MenuEvent::OutsideClick), MenuState::Closed);
}

#[test]
fn escape_closes_open_menu() {
    assert_eq!(MenuState::Open.next(MenuEvent::Escape), MenuState::Closed);
}

#[test]
fn close_events_are_noops_when_closed() {
    for event in [MenuEvent::LinkClick, MenuEvent::OutsideClick, MenuEvent::Escape] {
        assert_eq!(MenuState::Closed.next(event), MenuState::Closed);
    }
}
