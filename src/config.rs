//! Site configuration.
//!
//! Defaults match the static host pages under `site/`. The only runtime
//! override is `<body data-data-root="...">`, read by the entry point.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_DATA_ROOT: &str = "data";
const DEFAULT_THEME_STORAGE_KEY: &str = "theme-preference";
const DEFAULT_THEME_ATTRIBUTE: &str = "data-bs-theme";

/// Where data documents live and how theme state is stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory prefix for the JSON documents, relative to the page.
    pub data_root: String,
    /// `localStorage` key holding the explicit theme choice.
    pub theme_storage_key: String,
    /// Attribute set on `<html>` to the active theme.
    pub theme_attribute: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_root: DEFAULT_DATA_ROOT.to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            theme_attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Defaults with a different data root. Blank roots keep the default.
    #[must_use]
    pub fn with_data_root(root: &str) -> Self {
        Self::default().apply_data_root(Some(root))
    }

    /// Override `data_root` from an optional attribute value.
    #[must_use]
    pub fn apply_data_root(mut self, root: Option<&str>) -> Self {
        if let Some(root) = root.map(|r| r.trim().trim_end_matches('/')).filter(|r| !r.is_empty()) {
            self.data_root = root.to_owned();
        }
        self
    }

    #[must_use]
    pub fn experience_path(&self) -> String {
        self.data_path("experience.json")
    }

    #[must_use]
    pub fn tools_path(&self) -> String {
        self.data_path("tools.json")
    }

    #[must_use]
    pub fn projects_path(&self) -> String {
        self.data_path("projects.json")
    }

    #[must_use]
    pub fn contact_path(&self) -> String {
        self.data_path("contact.json")
    }

    fn data_path(&self, file: &str) -> String {
        format!("{}/{file}", self.data_root)
    }
}
