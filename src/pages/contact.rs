//! Contact page: a single contact card.

use leptos::prelude::*;

use crate::components::contact_card::{CONTAINER_CLASSES, ContactCard};
use crate::config::SiteConfig;
use crate::net::api;
use crate::net::types::ContactInfo;
use crate::util::dom::{add_classes, mount_into};

pub const CONTACT_DETAILS_ID: &str = "contact-details";

pub fn render_contact(contact: ContactInfo) {
    add_classes(CONTACT_DETAILS_ID, CONTAINER_CLASSES);
    mount_into(CONTACT_DETAILS_ID, move || view! { <ContactCard contact=contact/> });
}

pub async fn init_contact_page(config: SiteConfig) {
    match api::fetch_contact(&config).await {
        Ok(contact) => render_contact(contact),
        Err(err) => log::error!("error initialising contact page: {err}"),
    }
}
