//! Contact card for the contact page.

#[cfg(test)]
#[path = "contact_card_test.rs"]
mod contact_card_test;

use leptos::prelude::*;

use crate::net::types::ContactInfo;

/// Classes added to the `#contact-details` container itself.
pub const CONTAINER_CLASSES: &[&str] = &["card", "bg-body", "border-secondary-subtle", "shadow-sm"];

/// One labelled link row on the card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRow {
    pub label: String,
    pub href: String,
    pub text: String,
    /// Open in a new tab with `noopener noreferrer`.
    pub external: bool,
}

impl ContactRow {
    fn external(label: &str, url: &str, text: &str) -> Self {
        Self { label: label.to_owned(), href: url.to_owned(), text: text.to_owned(), external: true }
    }
}

/// Email first, then GitHub and LinkedIn when present, then `other` in order.
#[must_use]
pub fn contact_rows(contact: &ContactInfo) -> Vec<ContactRow> {
    let mut rows = vec![ContactRow {
        label: "Email".to_owned(),
        href: format!("mailto:{}", contact.email),
        text: contact.email.clone(),
        external: false,
    }];
    if let Some(github) = &contact.github {
        rows.push(ContactRow::external("GitHub", github, github));
    }
    if let Some(linkedin) = &contact.linkedin {
        rows.push(ContactRow::external("LinkedIn", linkedin, linkedin));
    }
    rows.extend(
        contact
            .other
            .iter()
            .map(|link| ContactRow::external(&link.label, &link.url, &link.link_text)),
    );
    rows
}

#[component]
pub fn ContactCard(contact: ContactInfo) -> impl IntoView {
    let rows = contact_rows(&contact);
    let location = contact
        .location
        .map(|location| view! { <p class="contact-card__location">{location}</p> });

    view! {
        <div class="card-body">
            <h2 class="contact-card__name h4">{contact.name}</h2>
            {location}
            {rows.into_iter().map(|row| view! { <ContactRowView row=row/> }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ContactRowView(row: ContactRow) -> impl IntoView {
    let (target, rel) = if row.external { (Some("_blank"), Some("noopener noreferrer")) } else { (None, None) };
    view! {
        <div class="contact-card__item">
            <div class="contact-card__label">{row.label}</div>
            <div class="contact-card__value">
                <a href=row.href target=target rel=rel>
                    {row.text}
                </a>
            </div>
        </div>
    }
}
