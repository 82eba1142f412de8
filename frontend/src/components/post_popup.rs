use hollow_tags_shared::{popup::PopupAction, PopupView};
use web_sys::Element;
use yew::prelude::*;

use crate::{
    config,
    i18n::{current::blog as t, fill},
};

#[derive(Properties, PartialEq, Clone)]
pub struct PostPopupProps {
    pub view: PopupView,
    /// Element the overlay is appended to, normally `<body>`.
    pub host: Element,
    pub on_action: Callback<PopupAction>,
}

/// Full post in a modal overlay. The overlay only exists while this
/// component is mounted.
#[function_component(PostPopup)]
pub fn post_popup(props: &PostPopupProps) -> Html {
    let PostPopupProps {
        view,
        host,
        on_action,
    } = props;
    let overlay_ref = use_node_ref();

    let on_overlay_click = {
        let overlay_ref = overlay_ref.clone();
        let on_action = on_action.clone();
        Callback::from(move |event: MouseEvent| {
            // Only a click on the dimmed background itself dismisses.
            let on_background = match (event.target(), overlay_ref.get()) {
                (Some(target), Some(overlay)) => js_sys::Object::is(target.as_ref(), overlay.as_ref()),
                _ => false,
            };
            on_action.emit(PopupAction::OverlayClick {
                on_background,
            });
        })
    };

    let on_close = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(PopupAction::Close))
    };

    let overlay = html! {
        <div class="popup-overlay" ref={overlay_ref} onclick={on_overlay_click}>
            <div class="popup-content">
                <button
                    type="button"
                    class="close-popup"
                    aria-label={t::CLOSE_POPUP_ARIA}
                    onclick={on_close}
                >
                    { t::CLOSE_POPUP }
                </button>
                <img class="popup-header-image" src={config::asset_path(&view.image)} alt={view.title.clone()} loading="lazy" />
                <div class="popup-body">
                    <h1>{ &view.title }</h1>
                    <p class="popup-meta">{ fill(t::BYLINE, &[&view.author, &view.date]) }</p>
                    { for view.sections.iter().map(|section| html! {
                        <div class="field">
                            <h2>{ &section.heading }</h2>
                            <p>{ &section.body }</p>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    };

    yew::create_portal(overlay, host.clone())
}
