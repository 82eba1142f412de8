use hollow_tags_shared::nav;
use web_sys::Element;

use crate::dom::ElementClasses;

/// Mark every link pointing at the page at `pathname`. Returns how many
/// links were marked.
pub fn highlight(pathname: &str, links: &[Element]) -> usize {
    let links: Vec<(Option<String>, ElementClasses)> = links
        .iter()
        .map(|link| (link.get_attribute("href"), ElementClasses::of(link)))
        .collect();
    nav::mark_active(pathname, &links)
}
