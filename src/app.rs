//! Entry point: shared chrome first, then the page controller.
//!
//! Footer year and theme controls always initialize; a failing page
//! controller only affects its own containers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::future::Future;

use crate::config::SiteConfig;
use crate::pages::{self, Page};
use crate::util::dom::{body_data, set_footer_year};
use crate::util::theme::init_theme_controls;

/// Build configuration from `<body>` attributes.
#[must_use]
pub fn site_config() -> SiteConfig {
    SiteConfig::default().apply_data_root(body_data("data-root").as_deref())
}

/// Run everything a page load needs.
pub fn boot() {
    set_footer_year();

    let config = site_config();
    init_theme_controls(&config);

    match Page::from_attr(body_data("page").as_deref()) {
        Some(page) => {
            log::debug!("starting {} page", page.as_str());
            dispatch(page, config);
        }
        None => log::debug!("no page controller for this document"),
    }
}

/// Start the controller for `page` in the background.
pub fn dispatch(page: Page, config: SiteConfig) {
    match page {
        Page::Home => spawn(pages::home::init_home_page(config)),
        Page::Projects => spawn(pages::projects::init_projects_page(config)),
        Page::Contact => spawn(pages::contact::init_contact_page(config)),
    }
}

fn spawn(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(fut);
    }
    #[cfg(not(feature = "csr"))]
    {
        futures::executor::block_on(fut);
    }
}
