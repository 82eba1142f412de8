use hollow_tags_shared::PreviewCard;
use yew::prelude::*;

use crate::{
    config,
    i18n::{current::blog as t, fill},
};

#[derive(Properties, PartialEq, Clone)]
pub struct PostPreviewProps {
    pub card: PreviewCard,
    /// Called with the post index when the card is clicked.
    pub on_open: Callback<usize>,
}

#[function_component(PostPreview)]
pub fn post_preview(props: &PostPreviewProps) -> Html {
    let card = &props.card;

    let onclick = {
        let on_open = props.on_open.clone();
        let index = card.index;
        Callback::from(move |_: MouseEvent| on_open.emit(index))
    };

    html! {
        <div class="blog-preview" {onclick}>
            if card.is_new {
                <div class="new-badge">{ t::NEW_BADGE }</div>
            }
            <div class="blog-image-wrapper">
                <img class="blog-image" src={config::asset_path(&card.image)} alt={card.title.clone()} loading="lazy" />
            </div>
            <div class="blog-info">
                <h2 class="blog-title">{ &card.title }</h2>
                <p class="blog-meta">{ fill(t::BYLINE, &[&card.author, &card.date]) }</p>
            </div>
        </div>
    }
}
