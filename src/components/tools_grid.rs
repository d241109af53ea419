//! Tools grid cards for the home page.

use leptos::prelude::*;

use crate::net::types::Tool;

/// One card per tool, in the order given.
#[component]
pub fn ToolsGrid(tools: Vec<Tool>) -> impl IntoView {
    tools.into_iter().map(|tool| view! { <ToolCard tool=tool/> }).collect::<Vec<_>>()
}

#[component]
fn ToolCard(tool: Tool) -> impl IntoView {
    let stars = tool.is_proficient().then(|| {
        view! {
            <span class="tool-stars text-warning small" aria-label="Proficient level">
                "★★★"
            </span>
        }
    });
    let level = tool.level.as_ref().map(|level| {
        view! { <p class="text-secondary small mb-0 text-capitalize">{level.display_label()}</p> }
    });

    view! {
        <div class="col">
            <article class="card h-100 bg-body border-secondary-subtle shadow-sm">
                <div class="card-body py-2">
                    <h3 class="h6 mb-1 d-flex align-items-center justify-content-between">
                        <span>{tool.name}</span>
                        {stars}
                    </h3>
                    {level}
                </div>
            </article>
        </div>
    }
}
