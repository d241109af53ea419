use leptos::prelude::*;

use super::*;

#[test]
fn company_line_joins_location_with_middle_dot() {
    assert_eq!(company_line("Acme", Some("Remote")), "Acme \u{b7} Remote");
}

#[test]
fn company_line_without_location_is_company_only() {
    assert_eq!(company_line("Acme", None), "Acme");
}

#[test]
fn date_range_formats_both_ends() {
    assert_eq!(date_range(Some("January 2020"), Some("present")), "Jan 2020 \u{b7} Present");
}

#[test]
fn date_range_keeps_unknown_labels() {
    assert_eq!(date_range(Some("Spring 2019"), None), "Spring 2019 \u{b7} ");
}

// =============================================================
// Rendered markup
// =============================================================

fn entry(id: i64, highlights: &[&str], tools: &[&str]) -> ExperienceEntry {
    ExperienceEntry {
        id,
        role: format!("Role {id}"),
        company: "Acme".to_owned(),
        location: Some("Remote".to_owned()),
        start: Some("January 2020".to_owned()),
        end: Some("Present".to_owned()),
        summary: "Built things.".to_owned(),
        highlights: highlights.iter().map(|h| (*h).to_owned()).collect(),
        tools: tools.iter().map(|t| (*t).to_owned()).collect(),
    }
}

fn render_details(entry: ExperienceEntry) -> String {
    Owner::new().with(|| view! { <ExperienceDetails entry=entry/> }.to_html())
}

#[test]
fn details_omit_empty_highlights_and_tools() {
    let html = render_details(entry(1, &[], &[]));
    assert!(html.contains("experience-details__title"));
    assert!(html.contains("Role 1"));
    assert!(!html.contains("experience-details__highlights"));
    assert!(!html.contains("experience-details__tools"));
}

#[test]
fn details_render_highlights_and_tool_pills() {
    let html = render_details(entry(1, &["Shipped v2"], &["Rust", "SQL"]));
    assert!(html.contains("experience-details__highlights"));
    assert!(html.contains("<li>Shipped v2</li>"));
    assert_eq!(html.matches("experience-details__tool-pill").count(), 2);
}

#[test]
fn details_show_only_non_empty_list() {
    let html = render_details(entry(1, &[], &["Rust"]));
    assert!(!html.contains("experience-details__highlights"));
    assert!(html.contains("experience-details__tools"));
}

#[test]
fn timeline_marks_only_active_item() {
    let html = Owner::new().with(|| {
        let mut home = HomeState::new(vec![entry(1, &[], &[]), entry(2, &[], &[])], Vec::new());
        home.activate(1);
        let state = RwSignal::new(home);
        view! { <Timeline state=state/> }.to_html()
    });
    assert_eq!(html.matches("timeline-item__header").count(), 2);
    assert_eq!(html.matches("is-active").count(), 1);
    assert!(html.find("Role 2").unwrap() < html.find("Role 1").unwrap());
}

#[test]
fn active_experience_is_empty_until_activation() {
    let html = Owner::new().with(|| {
        let state = RwSignal::new(HomeState::new(vec![entry(1, &[], &[])], Vec::new()));
        view! { <ActiveExperience state=state/> }.to_html()
    });
    assert!(!html.contains("experience-details__title"));
}
