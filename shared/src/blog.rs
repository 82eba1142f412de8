//! Blog post records and the catalog that turns them into previews and popups.
//!
//! Post data is configuration, not code: the catalog decodes it from JSON
//! (the bundled resource or an inline page block) and everything downstream
//! works on the decoded records.

use std::{cmp::Reverse, fmt};

use chrono::NaiveDate;
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};
use tracing::{debug, warn};

use crate::error::SiteError;

/// Image shown for a post that does not name one.
pub const DEFAULT_POST_IMAGE: &str = "images/Logo.png";

const BUNDLED_POSTS: &str = include_str!("../data/blog_posts.json");

/// Long form used by the site copy, e.g. `September 5, 2024`.
const LONG_DATE_FORMAT: &str = "%B %d, %Y";
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// One heading + body block of a post, in author order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostField {
    /// Section heading, e.g. `✨ Additions`.
    pub heading: String,
    /// Section body text.
    pub body: String,
}

/// A single blog post as authored in the post data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlogPost {
    /// Post title.
    pub title: String,
    /// Human-readable publication date; see [`BlogPost::published_on`].
    pub date: String,
    /// Display name of the author.
    pub author: String,
    /// Path of the header image, relative to the page.
    #[serde(default)]
    pub image: Option<String>,
    /// Body sections, kept in the order they appear in the source object.
    #[serde(deserialize_with = "fields_in_order")]
    pub fields: Vec<PostField>,
    /// Whether the preview carries the `NEW` badge.
    #[serde(rename = "new", default)]
    pub is_new: bool,
    /// Unavailable posts are never rendered. Posts that leave the flag out
    /// are treated as unavailable.
    #[serde(rename = "available", default)]
    pub is_available: bool,
}

impl BlogPost {
    /// Calendar date of the post, or `None` when `date` is in neither the
    /// long (`July 26, 2024`) nor the ISO (`2024-07-26`) form.
    pub fn published_on(&self) -> Option<NaiveDate> {
        let date = self.date.trim();
        NaiveDate::parse_from_str(date, LONG_DATE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(date, ISO_DATE_FORMAT))
            .ok()
    }

    /// Image path with the site logo as fallback.
    pub fn image_or_default(&self) -> &str {
        self.image
            .as_deref()
            .filter(|image| !image.trim().is_empty())
            .unwrap_or(DEFAULT_POST_IMAGE)
    }
}

/// Decode a JSON object into ordered fields. A repeated heading keeps its
/// first position and takes the last body, the way a JS object literal does.
fn fields_in_order<'de, D>(deserializer: D) -> Result<Vec<PostField>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FieldsVisitor;

    impl<'de> Visitor<'de> for FieldsVisitor {
        type Value = Vec<PostField>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of section headings to body text")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut fields: Vec<PostField> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((heading, body)) = map.next_entry::<String, String>()? {
                match fields.iter_mut().find(|field| field.heading == heading) {
                    Some(existing) => existing.body = body,
                    None => fields.push(PostField {
                        heading,
                        body,
                    }),
                }
            }
            Ok(fields)
        }
    }

    deserializer.deserialize_map(FieldsVisitor)
}

/// Everything a preview card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCard {
    /// Position of the post in [`Catalog::posts`]; used to open its popup.
    pub index: usize,
    /// Show the `NEW` badge.
    pub is_new: bool,
    /// Image path, already defaulted.
    pub image: String,
    /// Post title.
    pub title: String,
    /// Author for the caption line.
    pub author: String,
    /// Date for the caption line, as authored.
    pub date: String,
}

/// Everything the popup shows for one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupView {
    /// Header image path, already defaulted.
    pub image: String,
    /// Post title.
    pub title: String,
    /// Author for the meta line.
    pub author: String,
    /// Date for the meta line, as authored.
    pub date: String,
    /// Body sections in authored order.
    pub sections: Vec<PostField>,
}

impl From<&BlogPost> for PopupView {
    fn from(post: &BlogPost) -> Self {
        PopupView {
            image: post.image_or_default().to_string(),
            title: post.title.clone(),
            author: post.author.clone(),
            date: post.date.clone(),
            sections: post.fields.clone(),
        }
    }
}

/// The immutable set of posts for a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    posts: Vec<BlogPost>,
}

impl Catalog {
    /// Wrap an already-decoded post list.
    pub fn new(posts: Vec<BlogPost>) -> Self {
        Self {
            posts,
        }
    }

    /// The post list shipped with the script.
    pub fn bundled() -> Result<Self, SiteError> {
        Self::from_json(BUNDLED_POSTS)
    }

    /// Decode a JSON array of posts.
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        let posts: Vec<BlogPost> = serde_json::from_str(json)?;
        debug!(count = posts.len(), "decoded blog posts");
        Ok(Self::new(posts))
    }

    /// All posts, including unavailable ones, in authored order.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Available posts, newest first. Posts sharing a date keep their
    /// authored order; posts with an unreadable date go last.
    pub fn listing(&self) -> Vec<(usize, &BlogPost)> {
        let mut listing: Vec<(usize, &BlogPost)> = self
            .posts
            .iter()
            .enumerate()
            .filter(|(_, post)| post.is_available)
            .collect();

        listing.sort_by_cached_key(|(_, post)| {
            let date = post.published_on();
            if date.is_none() {
                warn!(title = %post.title, date = %post.date, "unparseable post date, listing last");
            }
            (date.is_none(), Reverse(date))
        });
        listing
    }

    /// Preview cards in display order.
    pub fn previews(&self) -> Vec<PreviewCard> {
        self.listing()
            .into_iter()
            .map(|(index, post)| PreviewCard {
                index,
                is_new: post.is_new,
                image: post.image_or_default().to_string(),
                title: post.title.clone(),
                author: post.author.clone(),
                date: post.date.clone(),
            })
            .collect()
    }

    /// Popup content for the post at `index`, if it exists and is available.
    pub fn popup(&self, index: usize) -> Option<PopupView> {
        self.posts
            .get(index)
            .filter(|post| post.is_available)
            .map(PopupView::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, date: &str, available: bool) -> BlogPost {
        BlogPost {
            title: title.to_string(),
            date: date.to_string(),
            author: "abztrc".to_string(),
            image: None,
            fields: Vec::new(),
            is_new: false,
            is_available: available,
        }
    }

    fn titles(catalog: &Catalog) -> Vec<String> {
        catalog.previews().into_iter().map(|card| card.title).collect()
    }

    #[test]
    fn listing_is_newest_first_and_skips_unavailable() {
        let catalog = Catalog::new(vec![
            post("update", "July 26, 2024", true),
            post("spotlight", "August 15, 2024", true),
            post("patch", "September 5, 2024", true),
            post("draft", "October 1, 2024", false),
        ]);

        assert_eq!(titles(&catalog), vec!["patch", "spotlight", "update"]);
    }

    #[test]
    fn equal_dates_keep_authored_order() {
        let catalog = Catalog::new(vec![
            post("first", "2024-08-15", true),
            post("second", "August 15, 2024", true),
            post("older", "2024-01-01", true),
        ]);

        assert_eq!(titles(&catalog), vec!["first", "second", "older"]);
    }

    #[test]
    fn unparseable_dates_sort_last() {
        let catalog = Catalog::new(vec![
            post("mystery", "someday", true),
            post("known", "2023-02-01", true),
        ]);

        assert_eq!(titles(&catalog), vec!["known", "mystery"]);
    }

    #[test]
    fn accepts_long_and_iso_dates() {
        assert_eq!(
            post("a", "September 5, 2024", true).published_on(),
            NaiveDate::from_ymd_opt(2024, 9, 5)
        );
        assert_eq!(
            post("b", "2024-09-05", true).published_on(),
            NaiveDate::from_ymd_opt(2024, 9, 5)
        );
        assert_eq!(post("c", "", true).published_on(), None);
    }

    #[test]
    fn preview_falls_back_to_logo_image() {
        let mut with_image = post("with", "2024-01-02", true);
        with_image.image = Some("../images/Banner.png".to_string());
        let catalog = Catalog::new(vec![with_image, post("without", "2024-01-01", true)]);

        let images: Vec<String> = catalog.previews().into_iter().map(|card| card.image).collect();
        assert_eq!(images, vec!["../images/Banner.png", DEFAULT_POST_IMAGE]);
    }

    #[test]
    fn decodes_fields_in_source_order() {
        let json = r#"[{
            "title": "Patch Notes",
            "date": "September 5, 2024",
            "author": "abztrc",
            "fields": { "Zeta": "last letter", "Alpha": "first letter", "Mu": "middle" },
            "new": true,
            "available": true
        }]"#;

        let catalog = Catalog::from_json(json).expect("valid post data");
        let headings: Vec<&str> = catalog.posts()[0]
            .fields
            .iter()
            .map(|field| field.heading.as_str())
            .collect();
        assert_eq!(headings, vec!["Zeta", "Alpha", "Mu"]);
        assert!(catalog.posts()[0].is_new);
    }

    #[test]
    fn repeated_heading_keeps_position_and_last_body() {
        let json = r#"[{
            "title": "t", "date": "2024-01-01", "author": "a", "available": true,
            "fields": { "A": "one", "B": "two", "A": "three" }
        }]"#;

        let catalog = Catalog::from_json(json).expect("valid post data");
        assert_eq!(catalog.posts()[0].fields, vec![
            PostField {
                heading: "A".to_string(),
                body: "three".to_string(),
            },
            PostField {
                heading: "B".to_string(),
                body: "two".to_string(),
            },
        ]);
    }

    #[test]
    fn post_without_available_flag_is_hidden_alone() {
        let json = r#"[
            { "title": "listed", "date": "2024-03-01", "author": "a", "fields": {}, "available": true },
            { "title": "unflagged", "date": "2024-04-01", "author": "a", "fields": {} }
        ]"#;

        let catalog = Catalog::from_json(json).expect("missing flag is not a decode error");
        assert_eq!(catalog.posts().len(), 2);
        assert!(!catalog.posts()[1].is_available);
        assert_eq!(titles(&catalog), vec!["listed"]);
    }

    #[test]
    fn popup_image_falls_back_to_logo() {
        let catalog = Catalog::new(vec![post("bare", "2024-01-01", true)]);
        let view = catalog.popup(0).expect("available post has a popup");
        assert_eq!(view.image, DEFAULT_POST_IMAGE);
    }

    #[test]
    fn rejects_malformed_post_data() {
        let err = Catalog::from_json(r#"[{ "title": "missing everything" }]"#).unwrap_err();
        assert!(matches!(err, SiteError::PostData(_)));
    }

    #[test]
    fn popup_only_for_available_posts() {
        let catalog = Catalog::new(vec![post("live", "2024-01-01", true), post("hidden", "2024-01-01", false)]);

        assert_eq!(catalog.popup(0).map(|view| view.title), Some("live".to_string()));
        assert!(catalog.popup(1).is_none());
        assert!(catalog.popup(7).is_none());
    }

    #[test]
    fn bundled_posts_render_newest_first() {
        let catalog = Catalog::bundled().expect("bundled post data decodes");

        assert_eq!(titles(&catalog), vec![
            "Patch Notes 1.0.1",
            "Community Spotlight #1",
            "Developer Update #1"
        ]);
        let newest = catalog.popup(catalog.previews()[0].index).expect("popup for listed post");
        assert_eq!(newest.sections.len(), 3);
        assert_eq!(newest.sections[0].heading, "✨ Additions");
    }
}
