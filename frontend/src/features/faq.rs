use hollow_tags_shared::marker;
use web_sys::Element;

use crate::dom::{Disposer, ElementClasses, EventListener};

/// Each item opens and closes on its own; any number can be open at once.
pub fn attach(items: Vec<Element>) -> Disposer {
    let mut disposer = Disposer::default();
    for item in items {
        let classes = ElementClasses::of(&item);
        disposer.push(EventListener::new(item.as_ref(), "click", move |_| {
            marker::toggle_open(&classes);
        }));
    }
    disposer
}
