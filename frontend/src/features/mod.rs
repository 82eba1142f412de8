// Page enhancements over the static markup. Each takes the elements it works
// on and returns whatever keeps its listeners alive.

pub mod faq;
pub mod footer;
pub mod mobile_nav;
pub mod nav_highlight;
pub mod scroll_effect;
pub mod section_scroll;
pub mod theme_switcher;
