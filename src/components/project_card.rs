//! Project cards for the projects page.
//!
//! DESIGN
//! ======
//! Link attributes come from [`LinkBehavior`], derived only from
//! [`ProjectKind`], so the web/download split is decided in one place.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::net::types::{Project, ProjectKind};

const DOWNLOAD_ICON_PATH: &str = "M12 3v11.17l3.59-3.58L17 12l-5 5-5-5 1.41-1.41L11 14.17V3h1zM5 19h14v2H5z";

/// Anchor attributes and affordances for a project link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkBehavior {
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
    /// Render the bare `download` attribute.
    pub download: bool,
    /// Show the download icon over the thumbnail.
    pub overlay_icon: bool,
}

impl LinkBehavior {
    #[must_use]
    pub fn for_kind(kind: ProjectKind) -> Self {
        match kind {
            ProjectKind::Download => Self { target: None, rel: None, download: true, overlay_icon: true },
            ProjectKind::Web => Self {
                target: Some("_blank"),
                rel: Some("noopener noreferrer"),
                download: false,
                overlay_icon: false,
            },
        }
    }
}

/// Alt text for a project thumbnail.
#[must_use]
pub fn thumbnail_alt(title: &str) -> String {
    format!("{title} thumbnail")
}

/// Cards in data order.
#[component]
pub fn ProjectsGrid(projects: Vec<Project>) -> impl IntoView {
    projects
        .into_iter()
        .map(|project| view! { <ProjectCard project=project/> })
        .collect::<Vec<_>>()
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let behavior = LinkBehavior::for_kind(project.kind);
    let alt = thumbnail_alt(&project.title);
    let overlay = behavior.overlay_icon.then(|| {
        view! {
            <div class="project-card__overlay-icon">
                <svg viewBox="0 0 24 24" aria-hidden="true" focusable="false">
                    <path d=DOWNLOAD_ICON_PATH fill="currentColor"></path>
                </svg>
            </div>
        }
    });

    view! {
        <div class="col">
            <a
                href=project.url
                class="card h-100 bg-body border-secondary-subtle text-reset text-decoration-none shadow-sm project-card"
                data-link-type=project.kind.as_str()
                target=behavior.target
                rel=behavior.rel
                download=behavior.download.then_some("")
            >
                <div class="project-card__image-wrapper">
                    <img src=project.thumbnail alt=alt class="card-img-top"/>
                    <div class="project-card__overlay">{overlay}</div>
                </div>
                <div class="card-body">
                    <h3 class="h6 card-title mb-1">{project.title}</h3>
                    <p class="card-text small text-secondary mb-0">{project.description}</p>
                </div>
            </a>
        </div>
    }
}
