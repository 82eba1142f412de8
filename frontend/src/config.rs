//! Page anchors and marker classes the script works with.
//!
//! Every selector is optional on a given page: a missing anchor switches the
//! matching feature off.

/// Site header that picks up the scrolled marker.
pub const HEADER: &str = ".navigationHeader";
/// Primary and mobile navigation links.
pub const NAV_LINKS: &str = ".header-button, .mobile-nav a";

pub const MOBILE_NAV: &str = ".mobile-nav";
pub const MOBILE_NAV_OPEN: &str = ".mobile-nav-button";
pub const MOBILE_NAV_CLOSE: &str = ".mobile-nav-close-button";

pub const THEME_SWITCHER: &str = "#theme-switcher";

/// Presence of this section turns the accordion on.
pub const FAQ: &str = ".faq";
pub const FAQ_ITEM: &str = ".faq-item";

pub const BLOGS_CONTAINER: &str = ".blogs-container";
/// Optional inline `<script type="application/json">` replacing the bundled
/// post list.
pub const BLOG_POSTS_DATA_ID: &str = "blog-posts";

pub const FOOTER_YEAR_ID: &str = "current-year";

/// Base URL that relative asset paths resolve against.
/// - Site root deployment: "/"
/// - Project-page deployment: "/hollow-tags/"
pub const BASE_URL: &str = "/";

/// Resolve a post image path against [`BASE_URL`]. Paths that are already
/// absolute, or explicitly relative to the current page (`./`, `../`), are
/// kept as written.
pub fn asset_path(path: &str) -> String {
    let kept = ["./", "../", "//", "http://", "https://", "data:"];
    if kept.iter().any(|prefix| path.starts_with(prefix)) {
        return path.to_string();
    }
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
