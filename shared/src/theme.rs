//! The two site color themes and the persisted switch between them.

use std::{fmt, str::FromStr};

use tracing::warn;

use crate::{
    error::SiteError,
    marker::ClassList,
    settings::{SettingsStore, THEME_KEY},
};

/// A site color theme, applied as a class on `<body>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// `theme-blue-purple`, used when nothing is stored.
    #[default]
    BluePurple,
    /// `theme-orange`.
    Orange,
}

impl Theme {
    /// Every supported theme.
    pub const ALL: [Theme; 2] = [Theme::BluePurple, Theme::Orange];

    /// Body class (and stored value) for this theme.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::BluePurple => "theme-blue-purple",
            Theme::Orange => "theme-orange",
        }
    }

    /// Theme currently shown by `body`. A body without the default class
    /// counts as the other theme, so a first toggle on a bare body lands on
    /// the default.
    pub fn applied_on<C: ClassList>(body: &C) -> Self {
        if body.contains(Theme::BluePurple.class_name()) {
            Theme::BluePurple
        } else {
            Theme::Orange
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::BluePurple => Theme::Orange,
            Theme::Orange => Theme::BluePurple,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for Theme {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.class_name() == s)
            .ok_or_else(|| SiteError::UnknownTheme(s.to_string()))
    }
}

/// Reads and flips the persisted theme.
#[derive(Debug)]
pub struct ThemeSwitcher<S> {
    store: S,
}

impl<S: SettingsStore> ThemeSwitcher<S> {
    /// Switcher persisting through `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
        }
    }

    /// The stored theme. Values other than the two theme names are ignored.
    pub fn stored(&self) -> Option<Theme> {
        let raw = self.store.get(THEME_KEY)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                warn!(%err, "ignoring stored theme");
                None
            },
        }
    }

    /// Theme to apply on page load. Falling back to the default does not
    /// write it to the store.
    pub fn initial(&self) -> Theme {
        self.stored().unwrap_or_default()
    }

    /// Flip away from `applied`, persist the result and return it.
    pub fn toggle(&self, applied: Theme) -> Theme {
        let next = applied.toggled();
        self.store.set(THEME_KEY, next.class_name());
        next
    }

    /// Put the page-load theme class on `body`.
    pub fn apply_initial<C: ClassList>(&self, body: &C) -> Theme {
        let theme = self.initial();
        body.add(theme.class_name());
        theme
    }

    /// Swap the theme class on `body` for the other one and persist it.
    pub fn toggle_on<C: ClassList>(&self, body: &C) -> Theme {
        let applied = Theme::applied_on(body);
        let next = self.toggle(applied);
        body.remove(applied.class_name());
        body.add(next.class_name());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        marker::MemoryClassList,
        settings::{DisabledStore, MemoryStore},
    };

    #[test]
    fn defaults_without_persisting() {
        let store = MemoryStore::new();
        let switcher = ThemeSwitcher::new(&store);

        assert_eq!(switcher.initial(), Theme::BluePurple);
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn toggle_round_trip_persists_each_step() {
        let store = MemoryStore::new();
        let switcher = ThemeSwitcher::new(&store);

        let first = switcher.toggle(switcher.initial());
        assert_eq!(first, Theme::Orange);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("theme-orange"));

        let second = switcher.toggle(first);
        assert_eq!(second, Theme::BluePurple);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("theme-blue-purple"));
    }

    #[test]
    fn restores_stored_theme() {
        let switcher = ThemeSwitcher::new(MemoryStore::with_entry(THEME_KEY, "theme-orange"));
        assert_eq!(switcher.initial(), Theme::Orange);
    }

    #[test]
    fn unknown_stored_value_falls_back() {
        let switcher = ThemeSwitcher::new(MemoryStore::with_entry(THEME_KEY, "theme-neon"));
        assert_eq!(switcher.stored(), None);
        assert_eq!(switcher.initial(), Theme::BluePurple);
    }

    #[test]
    fn disabled_store_still_toggles() {
        let switcher = ThemeSwitcher::new(DisabledStore);

        assert_eq!(switcher.toggle(Theme::BluePurple), Theme::Orange);
        assert_eq!(switcher.initial(), Theme::BluePurple);
    }

    #[test]
    fn parses_class_names() {
        assert_eq!("theme-orange".parse::<Theme>().ok(), Some(Theme::Orange));
        assert!(matches!(
            "orange".parse::<Theme>(),
            Err(SiteError::UnknownTheme(name)) if name == "orange"
        ));
    }

    #[test]
    fn body_class_flips_between_themes() {
        let store = MemoryStore::new();
        let switcher = ThemeSwitcher::new(&store);
        let body = MemoryClassList::default();

        assert_eq!(switcher.apply_initial(&body), Theme::BluePurple);
        assert!(body.contains("theme-blue-purple"));

        assert_eq!(switcher.toggle_on(&body), Theme::Orange);
        assert!(body.contains("theme-orange"));
        assert!(!body.contains("theme-blue-purple"));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("theme-orange"));

        assert_eq!(switcher.toggle_on(&body), Theme::BluePurple);
        assert!(body.contains("theme-blue-purple"));
        assert!(!body.contains("theme-orange"));
    }

    #[test]
    fn bare_body_toggles_to_default() {
        let switcher = ThemeSwitcher::new(MemoryStore::new());
        let body = MemoryClassList::with(&["page"]);

        assert_eq!(Theme::applied_on(&body), Theme::Orange);
        assert_eq!(switcher.toggle_on(&body), Theme::BluePurple);
        assert!(body.contains("theme-blue-purple"));
        assert!(body.contains("page"));
    }
}
