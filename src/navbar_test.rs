#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Scrolled threshold
// =============================================================

#[test]
fn below_threshold_is_not_scrolled() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(49.0));
}

#[test]
fn threshold_is_exclusive() {
    assert!(!is_scrolled(50.0));
}

#[test]
fn above_threshold_is_scrolled() {
    assert!(is_scrolled(51.0));
    assert!(is_scrolled(10_000.0));
}

// =============================================================
// Active section selection
// =============================================================

fn three_sections(offsets: [(f64, f64); 3]) -> Vec<SectionRect> {
    vec![
        SectionRect::new("about", offsets[0].0, offsets[0].1),
        SectionRect::new("projects", offsets[1].0, offsets[1].1),
        SectionRect::new("contact", offsets[2].0, offsets[2].1),
    ]
}

#[test]
fn only_straddling_section_is_active() {
    // Probe line sits at 120; only the middle section crosses it.
    let sections = three_sections([(-500.0, -100.0), (-100.0, 300.0), (300.0, 700.0)]);
    assert_eq!(active_section(&sections), Some("projects"));
}

#[test]
fn no_straddling_section_means_no_active_link() {
    let sections = three_sections([(200.0, 600.0), (600.0, 1000.0), (1000.0, 1400.0)]);
    assert_eq!(active_section(&sections), None);
}

#[test]
fn first_straddling_section_wins_in_document_order() {
    // Overlapping sections can both cross the line; document order decides.
    let sections = three_sections([(0.0, 400.0), (100.0, 500.0), (500.0, 900.0)]);
    assert_eq!(active_section(&sections), Some("about"));
}

#[test]
fn section_edges_touching_the_line_count_as_straddling() {
    let top_at_line = vec![SectionRect::new("about", 120.0, 500.0)];
    assert_eq!(active_section(&top_at_line), Some("about"));

    let bottom_at_line = vec![SectionRect::new("about", -200.0, 120.0)];
    assert_eq!(active_section(&bottom_at_line), Some("about"));
}

#[test]
fn empty_section_list_has_no_active_link() {
    assert_eq!(active_section(&[]), None);
}
