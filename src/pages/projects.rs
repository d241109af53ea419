//! Projects page: a grid of project cards in data order.

use leptos::prelude::*;

use crate::components::project_card::ProjectsGrid;
use crate::config::SiteConfig;
use crate::net::api;
use crate::net::types::Project;
use crate::util::dom::mount_into;

pub const PROJECTS_GRID_ID: &str = "projects-grid";

pub fn render_projects(projects: Vec<Project>) {
    log::debug!("rendering {} projects", projects.len());
    mount_into(PROJECTS_GRID_ID, move || view! { <ProjectsGrid projects=projects/> });
}

pub async fn init_projects_page(config: SiteConfig) {
    match api::fetch_projects(&config).await {
        Ok(projects) => render_projects(projects),
        Err(err) => log::error!("error initialising projects page: {err}"),
    }
}
