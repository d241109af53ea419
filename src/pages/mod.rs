//! Page controllers, one per host page.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its data loading and mounts components into the containers
//! its host page provides. `<body data-page="...">` selects the controller.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod contact;
pub mod home;
pub mod projects;

/// Host page kinds with a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    Contact,
}

impl Page {
    /// Parse the `data-page` body attribute. Unknown values have no controller.
    #[must_use]
    pub fn from_attr(raw: Option<&str>) -> Option<Self> {
        match raw? {
            "home" => Some(Self::Home),
            "projects" => Some(Self::Projects),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }
}
