use std::rc::Rc;

use hollow_tags_shared::{
    popup::{PopupAction, PopupSlot},
    Catalog,
};
use web_sys::{Document, Element};
use yew::{prelude::*, AppHandle};

use crate::{
    components::{post_popup::PostPopup, post_preview::PostPreview},
    config, dom,
};

#[derive(Properties, PartialEq)]
pub struct BlogCatalogProps {
    pub catalog: Rc<Catalog>,
    /// Where the popup overlay is attached.
    pub popup_host: Element,
}

#[derive(Default, PartialEq)]
struct PopupState(PopupSlot);

impl Reducible for PopupState {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(PopupState(next))
        }
    }
}

/// Preview cards for every listed post plus the single popup slot.
#[function_component(BlogCatalog)]
pub fn blog_catalog(props: &BlogCatalogProps) -> Html {
    let popup = use_reducer(PopupState::default);
    let previews = use_memo(props.catalog.clone(), |catalog| catalog.previews());

    let on_open = {
        let popup = popup.dispatcher();
        Callback::from(move |index: usize| popup.dispatch(PopupAction::Open(index)))
    };

    let on_popup_action = {
        let popup = popup.dispatcher();
        Callback::from(move |action: PopupAction| popup.dispatch(action))
    };

    let open_view = popup.0.showing().and_then(|index| props.catalog.popup(index));

    html! {
        <>
            { for previews.iter().map(|card| html! {
                <PostPreview key={card.index} card={card.clone()} on_open={on_open.clone()} />
            }) }
            if let Some(view) = open_view {
                <PostPopup {view} host={props.popup_host.clone()} on_action={on_popup_action} />
            }
        </>
    }
}

/// Post list for this page: an inline JSON block when the page provides one,
/// the bundled list otherwise.
fn load_catalog(document: &Document) -> Option<Catalog> {
    let inline = document
        .get_element_by_id(config::BLOG_POSTS_DATA_ID)
        .and_then(|block| block.text_content());

    let loaded = match inline {
        Some(json) => Catalog::from_json(&json),
        None => Catalog::bundled(),
    };
    match loaded {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            dom::log_error(&format!("blog catalog disabled: {err}"));
            None
        },
    }
}

/// Render the catalog into `container`. The handle must be kept for the
/// listing to stay live.
pub fn mount(document: &Document, container: Element) -> Option<AppHandle<BlogCatalog>> {
    let catalog = load_catalog(document)?;
    let popup_host: Element = document.body()?.into();
    let props = BlogCatalogProps {
        catalog: Rc::new(catalog),
        popup_host,
    };
    Some(yew::Renderer::<BlogCatalog>::with_root_and_props(container, props).render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignored_open_keeps_the_same_state() {
        let showing = Rc::new(PopupState::default()).reduce(PopupAction::Open(1));
        let again = showing.clone().reduce(PopupAction::Open(0));

        assert!(Rc::ptr_eq(&showing, &again));
        assert_eq!(again.0.showing(), Some(1));
    }

    #[test]
    fn background_click_empties_the_slot() {
        let state = Rc::new(PopupState(PopupSlot::Showing(0))).reduce(PopupAction::OverlayClick {
            on_background: true,
        });
        assert_eq!(state.0, PopupSlot::Empty);
    }
}
