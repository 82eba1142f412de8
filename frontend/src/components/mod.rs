// Yew components for the blog listing.

pub mod blog_catalog;
pub mod post_popup;
pub mod post_preview;
