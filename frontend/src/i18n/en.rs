pub mod blog {
    pub const NEW_BADGE: &str = "NEW";
    pub const BYLINE: &str = "By {} on {}";
    pub const CLOSE_POPUP: &str = "×";
    pub const CLOSE_POPUP_ARIA: &str = "Close post";
}
