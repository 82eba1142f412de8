//! Platform-free behavior behind the Hollow Tags site script.
//!
//! Everything here compiles for both the native test target and `wasm32`;
//! the `frontend` crate binds these pieces to the live DOM.

pub mod blog;
pub mod error;
pub mod marker;
pub mod nav;
pub mod popup;
pub mod scroll;
pub mod settings;
pub mod theme;

pub use blog::{BlogPost, Catalog, PopupView, PostField, PreviewCard};
pub use error::SiteError;
pub use marker::ClassList;
pub use popup::PopupSlot;
pub use settings::{DisabledStore, MemoryStore, SettingsStore};
pub use theme::{Theme, ThemeSwitcher};
