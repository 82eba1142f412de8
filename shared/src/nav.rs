//! Matching navigation links against the current page.

use crate::marker::{ClassList, ACTIVE_CLASS};

/// Page identifier used when the location path has no final segment.
pub const HOME_PAGE: &str = "index.html";

/// Final segment of `pathname`, or [`HOME_PAGE`] for `/`, `` and paths
/// ending in a slash.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => HOME_PAGE,
    }
}

/// `href` with any `#fragment` removed.
pub fn link_target(href: &str) -> &str {
    href.split('#').next().unwrap_or(href)
}

/// Whether a link with this `href` points at `current`.
pub fn is_active(href: &str, current: &str) -> bool {
    link_target(href) == current
}

/// Mark every link whose `href` points at the page at `pathname`. Markers
/// already on other links stay. Links without an `href` are skipped.
/// Returns how many links were marked.
pub fn mark_active<C: ClassList>(pathname: &str, links: &[(Option<String>, C)]) -> usize {
    let current = current_page(pathname);
    let mut marked = 0;
    for (href, classes) in links {
        if href.as_deref().is_some_and(|href| is_active(href, current)) {
            classes.add(ACTIVE_CLASS);
            marked += 1;
        }
    }
    marked
}
