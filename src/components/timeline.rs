//! Experience timeline and the details panel for the active entry.
//!
//! DESIGN
//! ======
//! Both views read the same `RwSignal<HomeState>`: clicking an item activates
//! it, which re-renders the details panel and moves the `is-active` class.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use leptos::prelude::*;

use crate::net::types::ExperienceEntry;
use crate::state::home::HomeState;
use crate::util::month::short_month_year_opt;

/// `"Company · Location"`, or just the company.
#[must_use]
pub fn company_line(company: &str, location: Option<&str>) -> String {
    match location {
        Some(location) => format!("{company} \u{b7} {location}"),
        None => company.to_owned(),
    }
}

/// `"Jan 2020 · Present"` from raw start/end labels.
#[must_use]
pub fn date_range(start: Option<&str>, end: Option<&str>) -> String {
    format!("{} \u{b7} {}", short_month_year_opt(start), short_month_year_opt(end))
}

/// Timeline items, newest first.
#[component]
pub fn Timeline(state: RwSignal<HomeState>) -> impl IntoView {
    let entries: Vec<ExperienceEntry> = state.with_untracked(|s| s.timeline().into_iter().cloned().collect());
    entries
        .into_iter()
        .map(|entry| view! { <TimelineItem entry=entry state=state/> })
        .collect::<Vec<_>>()
}

/// One clickable timeline entry.
#[component]
fn TimelineItem(entry: ExperienceEntry, state: RwSignal<HomeState>) -> impl IntoView {
    let id = entry.id;
    let meta = company_line(&entry.company, entry.location.as_deref());
    let dates = date_range(entry.start.as_deref(), entry.end.as_deref());

    view! {
        <li
            class="timeline-item"
            class:is-active=move || state.with(|s| s.is_active(id))
            data-id=id.to_string()
            on:click=move |_| {
                state.maybe_update(|s| s.activate(id));
            }
        >
            <div class="timeline-item__header">
                <h3>{entry.role}</h3>
                <p class="timeline-item__meta">{meta}</p>
                <p class="timeline-item__dates">{dates}</p>
            </div>
            <p class="timeline-item__summary">{entry.summary}</p>
        </li>
    }
}

/// Details for whichever entry is active; empty until one is.
#[component]
pub fn ActiveExperience(state: RwSignal<HomeState>) -> impl IntoView {
    move || {
        state
            .with(|s| s.active_entry().cloned())
            .map(|entry| view! { <ExperienceDetails entry=entry/> })
    }
}

/// Expanded view of one entry. Empty highlight/tool lists are omitted.
#[component]
pub fn ExperienceDetails(entry: ExperienceEntry) -> impl IntoView {
    let meta = company_line(&entry.company, entry.location.as_deref());
    let dates = date_range(entry.start.as_deref(), entry.end.as_deref());

    let highlights = (!entry.highlights.is_empty()).then(|| {
        view! {
            <ul class="experience-details__highlights">
                {entry.highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect::<Vec<_>>()}
            </ul>
        }
    });

    let tools = (!entry.tools.is_empty()).then(|| {
        view! {
            <div class="experience-details__tools">
                {entry
                    .tools
                    .into_iter()
                    .map(|t| view! { <span class="experience-details__tool-pill">{t}</span> })
                    .collect::<Vec<_>>()}
            </div>
        }
    });

    view! {
        <h3 class="experience-details__title">{entry.role}</h3>
        <p class="experience-details__meta">{meta}</p>
        <p class="experience-details__dates">{dates}</p>
        {highlights}
        {tools}
    }
}
