//! Durable per-origin preferences.
//!
//! The browser build backs [`SettingsStore`] with `localStorage`; tests and
//! environments without storage use the in-memory and disabled stores here.

use std::{cell::RefCell, collections::HashMap};

/// Key the theme preference is stored under.
pub const THEME_KEY: &str = "theme";

/// Best-effort string key-value store.
///
/// Reads from an unavailable store return `None`; writes to it are dropped.
/// Neither is an error.
pub trait SettingsStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

impl<S: SettingsStore + ?Sized> SettingsStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// Store that lives as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Store for environments where persistence is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledStore;

impl SettingsStore for DisabledStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}
}
