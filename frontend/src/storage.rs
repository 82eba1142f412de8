use hollow_tags_shared::SettingsStore;
use web_sys::{Storage, Window};

/// `localStorage` for the page origin. When the browser refuses access
/// (private modes, disabled storage) it behaves like an empty store that
/// drops writes.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl SettingsStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage.as_ref() {
            let _ = storage.set_item(key, value);
        }
    }
}
