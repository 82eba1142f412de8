use web_sys::Element;

/// Calendar year of the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

pub fn stamp(placeholder: &Element, year: u32) {
    placeholder.set_text_content(Some(&year.to_string()));
}
