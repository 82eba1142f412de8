use hollow_tags_shared::scroll;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Smoothly scroll the section with id `section_id` to just below the fixed
/// header. Returns `false` when there is no such section. Exposed to inline
/// page handlers as `scrollToSection`.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(section) = window
        .document()
        .and_then(|document| document.get_element_by_id(section_id))
    else {
        return false;
    };

    let section_top = section.get_bounding_client_rect().top();
    let page_y = window.scroll_y().unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(scroll::section_scroll_target(section_top, page_y));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}
