//! Home page state: loaded experience and tools, plus the active entry.
//!
//! DESIGN
//! ======
//! Built once from the two loaded documents and owned by the page. Click
//! handlers mutate it through an `RwSignal`, so there is no module-level
//! shared list.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use std::cmp::Ordering;

use crate::net::types::{ExperienceEntry, Tool};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeState {
    /// Experience sorted ascending by id.
    pub experience: Vec<ExperienceEntry>,
    /// Tools in display order.
    pub tools: Vec<Tool>,
    /// Id of the expanded entry, if any.
    pub active_id: Option<i64>,
    /// Whether a details panel is mounted. Without one nothing activates.
    pub has_details: bool,
}

impl HomeState {
    /// Build state from loaded documents. Nothing is active yet.
    #[must_use]
    pub fn new(mut experience: Vec<ExperienceEntry>, tools: Vec<Tool>) -> Self {
        experience.sort_by_key(|entry| entry.id);
        Self { experience, tools: sort_tools(tools), active_id: None, has_details: true }
    }

    /// Entries newest first, as the timeline shows them.
    #[must_use]
    pub fn timeline(&self) -> Vec<&ExperienceEntry> {
        self.experience.iter().rev().collect()
    }

    /// Id of the most recent entry.
    #[must_use]
    pub fn newest_id(&self) -> Option<i64> {
        self.experience.last().map(|entry| entry.id)
    }

    #[must_use]
    pub fn find(&self, id: i64) -> Option<&ExperienceEntry> {
        self.experience.iter().find(|entry| entry.id == id)
    }

    /// Record whether the details panel mounted. Losing it clears the
    /// active entry.
    pub fn set_details_panel(&mut self, present: bool) {
        self.has_details = present;
        if !present {
            self.active_id = None;
        }
    }

    /// Mark `id` active. Unknown ids, or a page without a details panel,
    /// leave the state untouched.
    ///
    /// Returns whether the entry was activated.
    pub fn activate(&mut self, id: i64) -> bool {
        if !self.has_details {
            log::debug!("no details panel; ignoring activation of experience {id}");
            return false;
        }
        if self.find(id).is_none() {
            log::debug!("ignoring activation of unknown experience {id}");
            return false;
        }
        self.active_id = Some(id);
        true
    }

    /// Activate the newest entry, if there is one.
    pub fn activate_newest(&mut self) -> bool {
        self.newest_id().is_some_and(|id| self.activate(id))
    }

    #[must_use]
    pub fn is_active(&self, id: i64) -> bool {
        self.active_id == Some(id)
    }

    #[must_use]
    pub fn active_entry(&self) -> Option<&ExperienceEntry> {
        self.active_id.and_then(|id| self.find(id))
    }
}

/// Proficient tools first, then by name ignoring case.
#[must_use]
pub fn sort_tools(mut tools: Vec<Tool>) -> Vec<Tool> {
    tools.sort_by(compare_tools);
    tools
}

fn compare_tools(a: &Tool, b: &Tool) -> Ordering {
    rank(a).cmp(&rank(b)).then_with(|| compare_names(&a.name, &b.name))
}

fn rank(tool: &Tool) -> u8 {
    tool.level.as_ref().map_or(1, |level| level.rank())
}

/// Case-insensitive code-point order, ties broken on the raw name.
///
/// Not locale collation: accented names sort by code point, so `"Élan"`
/// lands after `"Zig"`.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
