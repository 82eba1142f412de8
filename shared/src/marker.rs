//! Marker classes: class names used as on/off state on page elements.

use std::cell::RefCell;

/// Link matching the current page.
pub const ACTIVE_CLASS: &str = "active";
/// Header past the scroll threshold.
pub const SCROLLED_CLASS: &str = "scrolled";
/// Open mobile panel or FAQ item.
pub const OPEN_CLASS: &str = "open";

/// The class set of one element.
pub trait ClassList {
    /// Whether `class` is present.
    fn contains(&self, class: &str) -> bool;

    /// Add `class`; adding a present class changes nothing.
    fn add(&self, class: &str);

    /// Remove `class`; removing an absent class changes nothing.
    fn remove(&self, class: &str);

    /// Flip `class`.
    fn toggle(&self, class: &str) {
        if self.contains(class) {
            self.remove(class);
        } else {
            self.add(class);
        }
    }

    /// Add or remove `class` depending on `on`.
    fn set(&self, class: &str, on: bool) {
        if on {
            self.add(class);
        } else {
            self.remove(class);
        }
    }
}

/// Class set detached from any document.
#[derive(Debug, Default)]
pub struct MemoryClassList {
    classes: RefCell<Vec<String>>,
}

impl MemoryClassList {
    /// Class set holding `classes`.
    pub fn with(classes: &[&str]) -> Self {
        let list = Self::default();
        for class in classes {
            list.add(class);
        }
        list
    }
}

impl ClassList for MemoryClassList {
    fn contains(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|present| present == class)
    }

    fn add(&self, class: &str) {
        if !self.contains(class) {
            self.classes.borrow_mut().push(class.to_string());
        }
    }

    fn remove(&self, class: &str) {
        self.classes.borrow_mut().retain(|present| present != class);
    }
}

/// FAQ item click: open a closed item, close an open one.
pub fn toggle_open<C: ClassList>(item: &C) {
    item.toggle(OPEN_CLASS);
}
