use hollow_tags_shared::scroll;
use web_sys::{Element, Event, Window};

use crate::dom::{Disposer, ElementClasses, EventListener};

/// Keep the scrolled marker on `header` in sync with the window offset.
pub fn attach(window: &Window, header: Element) -> Disposer {
    let header = ElementClasses::of(&header);
    let on_scroll = {
        let window = window.clone();
        move |_: Event| scroll::sync_header(&header, window.scroll_y().unwrap_or(0.0))
    };

    let mut disposer = Disposer::default();
    disposer.push(EventListener::new(window.as_ref(), "scroll", on_scroll));
    disposer
}
