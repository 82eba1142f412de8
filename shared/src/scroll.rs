//! Scroll thresholds and offsets.

use crate::marker::{ClassList, SCROLLED_CLASS};

/// Offsets strictly above this many pixels count as scrolled.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Height of the fixed header that section scrolling compensates for.
pub const HEADER_OFFSET: f64 = 100.0;

/// Whether the header should carry the scrolled marker at `scroll_y`.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Put the scrolled marker on `header` exactly when `scroll_y` is past the
/// threshold.
pub fn sync_header<C: ClassList>(header: &C, scroll_y: f64) {
    header.set(SCROLLED_CLASS, is_scrolled(scroll_y));
}

/// Absolute scroll position that puts a section's top edge just below the
/// fixed header. `section_top` is the section's viewport-relative top.
pub fn section_scroll_target(section_top: f64, page_y_offset: f64) -> f64 {
    section_top + page_y_offset - HEADER_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::MemoryClassList;

    #[test]
    fn threshold_is_exclusive() {
        assert!(is_scrolled(51.0));
        assert!(!is_scrolled(50.0));
        assert!(!is_scrolled(0.0));
    }

    #[test]
    fn section_target_leaves_room_for_header() {
        assert_eq!(section_scroll_target(400.0, 250.0), 550.0);
        assert_eq!(section_scroll_target(-50.0, 120.0), -30.0);
    }

    #[test]
    fn header_marker_tracks_offset() {
        let header = MemoryClassList::with(&["navigationHeader"]);

        sync_header(&header, 51.0);
        assert!(header.contains(SCROLLED_CLASS));
        sync_header(&header, 50.0);
        assert!(!header.contains(SCROLLED_CLASS));
        sync_header(&header, 0.0);
        assert!(!header.contains(SCROLLED_CLASS));
    }
}
