use std::rc::Rc;

use hollow_tags_shared::{marker::OPEN_CLASS, ClassList};
use web_sys::Element;

use crate::dom::{Disposer, ElementClasses, EventListener};

/// Wire the open and close buttons of the mobile panel. Either button may be
/// missing; the other still works.
pub fn attach(panel: Element, open_button: Option<Element>, close_button: Option<Element>) -> Disposer {
    let panel = Rc::new(ElementClasses::of(&panel));
    let mut disposer = Disposer::default();

    if let Some(button) = open_button {
        let panel = panel.clone();
        disposer.push(EventListener::new(button.as_ref(), "click", move |_| panel.add(OPEN_CLASS)));
    }

    if let Some(button) = close_button {
        disposer.push(EventListener::new(button.as_ref(), "click", move |_| panel.remove(OPEN_CLASS)));
    }

    disposer
}
