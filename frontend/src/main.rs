//! Browser script for the Hollow Tags site: navigation highlighting, header
//! scroll effect, mobile menu, theme switcher, FAQ accordion, blog listing
//! with its post popup, and the footer year.

mod components;
mod config;
mod dom;
mod features;
mod i18n;
mod page;
mod storage;

fn main() {
    page::PageController::install();
}
