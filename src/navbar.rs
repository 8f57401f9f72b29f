//! Scrolled-state threshold and active-section selection.
//!
//! Both are pure functions of viewport geometry. The controller snapshots
//! the DOM rectangles on each scroll/resize event and feeds them here; no
//! browser types cross this boundary.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use crate::consts::{ACTIVE_SECTION_OFFSET_PX, SCROLL_THRESHOLD_PX};

/// Whether the navbar should show its "scrolled" styling at the given
/// vertical scroll offset. Strictly greater-than: exactly the threshold
/// still counts as top-of-page.
#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Viewport-relative geometry snapshot of one page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRect {
    /// The section element's id, without a leading `#`.
    pub id: String,
    /// Top edge relative to the viewport top, in CSS pixels.
    pub top: f64,
    /// Bottom edge relative to the viewport top, in CSS pixels.
    pub bottom: f64,
}

impl SectionRect {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self { id: id.into(), top, bottom }
    }

    /// Whether this section's bounds straddle the probe line at `offset`.
    #[must_use]
    fn straddles(&self, offset: f64) -> bool {
        self.top <= offset && self.bottom >= offset
    }
}

/// Id of the section to highlight in the navigation: the first section, in
/// document order, whose bounds straddle the probe line
/// [`ACTIVE_SECTION_OFFSET_PX`] below the viewport top. `None` when no
/// section straddles the line (no link is highlighted).
#[must_use]
pub fn active_section(sections: &[SectionRect]) -> Option<&str> {
    sections
        .iter()
        .find(|section| section.straddles(ACTIVE_SECTION_OFFSET_PX))
        .map(|section| section.id.as_str())
}
