use std::cell::RefCell;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;
use yew::AppHandle;

use crate::{
    components::blog_catalog::{self, BlogCatalog},
    config,
    dom::{self, Disposer},
    features::{faq, footer, mobile_nav, nav_highlight, scroll_effect, theme_switcher},
    storage::LocalStorage,
};

thread_local! {
    static PAGE: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

/// Everything the script attached to the current page.
pub struct PageController {
    disposers: Vec<Disposer>,
    catalog: Option<AppHandle<BlogCatalog>>,
}

impl PageController {
    /// Run [`PageController::init`] once the document is parsed and keep the
    /// result alive for the rest of the page.
    pub fn install() {
        let Some(document) = dom::document() else {
            return;
        };

        if document.ready_state() != "loading" {
            Self::install_now();
            return;
        }

        let on_ready = Closure::once_into_js(Self::install_now);
        if let Err(err) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            dom::log_error(&format!("failed to wait for DOMContentLoaded: {err:?}"));
        }
    }

    fn install_now() {
        let page = Self::init();
        PAGE.with(|slot| {
            if let Some(previous) = slot.borrow_mut().replace(page) {
                previous.teardown();
            }
        });
    }

    /// Attach every feature whose anchors exist on this page.
    pub fn init() -> Self {
        let mut page = PageController {
            disposers: Vec::new(),
            catalog: None,
        };
        let Some(window) = web_sys::window() else {
            return page;
        };
        let Some(document) = window.document() else {
            return page;
        };

        if let Some(header) = dom::query(&document, config::HEADER) {
            page.keep(scroll_effect::attach(&window, header));
        }

        if let Some(placeholder) = document.get_element_by_id(config::FOOTER_YEAR_ID) {
            footer::stamp(&placeholder, footer::current_year());
        }

        if let Some(panel) = dom::query(&document, config::MOBILE_NAV) {
            page.keep(mobile_nav::attach(
                panel,
                dom::query(&document, config::MOBILE_NAV_OPEN),
                dom::query(&document, config::MOBILE_NAV_CLOSE),
            ));
        }

        if let (Some(body), Some(control)) =
            (document.body(), dom::query(&document, config::THEME_SWITCHER))
        {
            page.keep(theme_switcher::attach(
                body.into(),
                control,
                LocalStorage::from_window(&window),
            ));
        }

        nav_highlight::highlight(&current_path(&window), &dom::query_all(&document, config::NAV_LINKS));

        if dom::query(&document, config::FAQ).is_some() {
            page.keep(faq::attach(dom::query_all(&document, config::FAQ_ITEM)));
        }

        if let Some(container) = dom::query(&document, config::BLOGS_CONTAINER) {
            page.catalog = blog_catalog::mount(&document, container);
        }

        page
    }

    fn keep(&mut self, disposer: Disposer) {
        if !disposer.is_empty() {
            self.disposers.push(disposer);
        }
    }

    /// Detach listeners and unmount the blog listing.
    pub fn teardown(self) {
        for disposer in self.disposers {
            disposer.dispose();
        }
        if let Some(catalog) = self.catalog {
            catalog.destroy();
        }
    }
}

fn current_path(window: &Window) -> String {
    window.location().pathname().unwrap_or_default()
}
