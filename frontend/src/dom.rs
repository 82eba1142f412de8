use hollow_tags_shared::ClassList;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, DomTokenList, Element, Event, EventTarget};

/// Document of the current window, if there is one.
pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// First element matching `selector`. Bad selectors count as no match.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Live class list of a page element.
pub struct ElementClasses(DomTokenList);

impl ElementClasses {
    pub fn of(element: &Element) -> Self {
        Self(element.class_list())
    }
}

impl ClassList for ElementClasses {
    fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    fn add(&self, class: &str) {
        let _ = self.0.add_1(class);
    }

    fn remove(&self, class: &str) {
        let _ = self.0.remove_1(class);
    }

    fn toggle(&self, class: &str) {
        let _ = self.0.toggle(class);
    }
}

pub fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// An attached DOM listener. Dropping it detaches the callback.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(err) => {
                log_error(&format!("failed to attach `{event}` listener: {err:?}"));
                None
            },
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Listeners owned by one page feature; dropping the disposer detaches them
/// all.
#[derive(Default)]
pub struct Disposer {
    listeners: Vec<EventListener>,
}

impl Disposer {
    pub fn push(&mut self, listener: Option<EventListener>) {
        self.listeners.extend(listener);
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Detach everything now.
    pub fn dispose(self) {
        drop(self);
    }
}
