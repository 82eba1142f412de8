use hollow_tags_shared::{SettingsStore, ThemeSwitcher};
use web_sys::Element;

use crate::dom::{Disposer, ElementClasses, EventListener};

/// Apply the stored theme to `body` and flip it on every click of `control`.
pub fn attach<S>(body: Element, control: Element, store: S) -> Disposer
where
    S: SettingsStore + 'static,
{
    let switcher = ThemeSwitcher::new(store);
    let body = ElementClasses::of(&body);
    switcher.apply_initial(&body);

    let mut disposer = Disposer::default();
    disposer.push(EventListener::new(control.as_ref(), "click", move |_| {
        switcher.toggle_on(&body);
    }));
    disposer
}
