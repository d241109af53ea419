//! Home page: experience timeline, details panel and tools grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Experience and tools load concurrently. Rendering happens only if both
//! succeed; otherwise the failure is logged and the page keeps its static
//! markup.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use std::future::Future;

use leptos::prelude::*;

use crate::components::timeline::{ActiveExperience, Timeline};
use crate::components::tools_grid::ToolsGrid;
use crate::config::SiteConfig;
use crate::net::api::{self, LoadError};
use crate::net::types::{ExperienceEntry, Tool};
use crate::state::home::HomeState;
use crate::util::dom::mount_into;

pub const TIMELINE_ID: &str = "experience-timeline";
pub const DETAILS_ID: &str = "experience-details";
pub const TOOLS_GRID_ID: &str = "tools-grid";

/// Load both documents and build the page state.
///
/// # Errors
///
/// Returns the first [`LoadError`] from either document.
pub async fn load_home(config: &SiteConfig) -> Result<HomeState, LoadError> {
    load_home_from(api::fetch_experience(config), api::fetch_tools(config)).await
}

/// Join the two loads; a single failure fails the whole page.
///
/// # Errors
///
/// Returns the first [`LoadError`] from either future.
pub async fn load_home_from<E, T>(experience: E, tools: T) -> Result<HomeState, LoadError>
where
    E: Future<Output = Result<Vec<ExperienceEntry>, LoadError>>,
    T: Future<Output = Result<Vec<Tool>, LoadError>>,
{
    let (experience, tools) = api::load_both(experience, tools).await?;
    Ok(HomeState::new(experience, tools))
}

/// Mount the timeline, tools grid and details panel, then expand the newest
/// entry. Without a details container nothing is ever marked active.
pub fn render_home(state: HomeState) -> RwSignal<HomeState> {
    log::debug!(
        "rendering home page: {} experience entries, {} tools",
        state.experience.len(),
        state.tools.len()
    );

    let tools = state.tools.clone();
    let state = RwSignal::new(state);
    mount_into(TIMELINE_ID, move || view! { <Timeline state=state/> });
    mount_into(TOOLS_GRID_ID, move || view! { <ToolsGrid tools=tools/> });
    let has_details = mount_into(DETAILS_ID, move || view! { <ActiveExperience state=state/> });
    if !has_details {
        log::warn!("#{DETAILS_ID} not found; experience entries will not expand");
    }
    state.update(|s| {
        s.set_details_panel(has_details);
        s.activate_newest();
    });
    state
}

pub async fn init_home_page(config: SiteConfig) {
    match load_home(&config).await {
        Ok(state) => {
            render_home(state);
        }
        Err(err) => log::error!("error initialising home page: {err}"),
    }
}
