//! Light/dark theme resolution, toggling and persistence.
//!
//! The explicit choice lives in `localStorage` under
//! [`SiteConfig::theme_storage_key`]. Until the user toggles, the page follows
//! the OS `prefers-color-scheme` setting, including live changes. The
//! OS-derived theme is never written back to storage.
//!
//! DESIGN
//! ======
//! Resolution logic runs against the [`ThemeStore`] trait so it is testable
//! natively; [`init_theme_controls`] binds it to the browser in csr builds.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::SiteConfig;

#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Selector for elements that flip the theme on click.
pub const TOGGLE_SELECTOR: &str = "[data-theme-toggle]";
/// Selector for the sun icon inside a toggle.
pub const SUN_ICON_SELECTOR: &str = "[data-theme-icon=\"sun\"]";
/// Selector for the moon icon inside a toggle.
pub const MOON_ICON_SELECTOR: &str = "[data-theme-icon=\"moon\"]";
/// Class hiding an icon.
pub const HIDDEN_CLASS: &str = "d-none";

/// Page color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value. Only `light` and `dark` are valid.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Read the document attribute value; anything but `dark` is light.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Self {
        if raw == Some("dark") { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Whether OS scheme changes are honored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tracking {
    /// A valid stored choice exists; OS changes are ignored.
    Explicit(Theme),
    /// No stored choice; the page follows the OS.
    System,
}

/// Persisted string slot for the explicit theme choice.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// What the toggle controls should show for a given theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleChrome {
    /// Accessible label describing the next action.
    pub label: &'static str,
    pub show_sun: bool,
    pub show_moon: bool,
}

impl ToggleChrome {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self { label: "Switch to light theme", show_sun: true, show_moon: false },
            Theme::Light => Self { label: "Switch to dark theme", show_sun: false, show_moon: true },
        }
    }
}

/// Theme state machine over a [`ThemeStore`].
#[derive(Clone, Debug)]
pub struct ThemeController<S> {
    store: S,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current subscription state, derived from storage.
    pub fn tracking(&self) -> Tracking {
        match self.store.load().as_deref().and_then(Theme::parse) {
            Some(theme) => Tracking::Explicit(theme),
            None => Tracking::System,
        }
    }

    /// Stored choice, else OS preference, else light.
    pub fn resolve_initial(&self, prefers_dark: Option<bool>) -> Theme {
        match self.tracking() {
            Tracking::Explicit(theme) => theme,
            Tracking::System => prefers_dark.map(Theme::from_prefers_dark).unwrap_or_default(),
        }
    }

    /// Flip `current`, persist the result and return it.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.store.save(next.as_str());
        log::debug!("theme toggled to {}", next.as_str());
        next
    }

    /// React to an OS scheme change. Returns the theme to apply, if any.
    pub fn on_system_change(&self, prefers_dark: bool) -> Option<Theme> {
        match self.tracking() {
            Tracking::Explicit(_) => None,
            Tracking::System => Some(Theme::from_prefers_dark(prefers_dark)),
        }
    }
}

/// `localStorage`-backed [`ThemeStore`]. Outside the browser it stores nothing.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ThemeStore for LocalStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &self.key;
            None
        }
    }

    fn save(&self, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                if storage.set_item(&self.key, value).is_err() {
                    log::warn!("could not persist theme preference");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.key, value);
        }
    }
}

/// Apply the initial theme, wire every toggle control, and subscribe to OS
/// scheme changes. Call once per page load.
pub fn init_theme_controls(config: &SiteConfig) {
    let controller = ThemeController::new(LocalStorage::new(config.theme_storage_key.clone()));

    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let media = window.match_media(DARK_QUERY).ok().flatten();
        let initial = controller.resolve_initial(media.as_ref().map(web_sys::MediaQueryList::matches));
        apply_theme(&config.theme_attribute, initial);

        for toggle in toggle_elements() {
            let controller = controller.clone();
            let attribute = config.theme_attribute.clone();
            let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
                let next = controller.toggle(current_theme(&attribute));
                apply_theme(&attribute, next);
            });
            if toggle
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("could not attach theme toggle handler");
            }
            on_click.forget();
        }

        if let Some(media) = media {
            let attribute = config.theme_attribute.clone();
            let on_change =
                Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
                    if let Some(theme) = controller.on_system_change(ev.matches()) {
                        apply_theme(&attribute, theme);
                    }
                });
            if media
                .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("could not subscribe to color scheme changes");
            }
            on_change.forget();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        apply_theme(&config.theme_attribute, controller.resolve_initial(None));
    }
}

/// Set the document attribute and update every toggle control.
pub fn apply_theme(attribute: &str, theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if root.set_attribute(attribute, theme.as_str()).is_err() {
            log::warn!("could not set {attribute}");
        }

        let chrome = ToggleChrome::for_theme(theme);
        for toggle in toggle_elements() {
            let _ = toggle.set_attribute("aria-label", chrome.label);
            set_icon_visible(&toggle, SUN_ICON_SELECTOR, chrome.show_sun);
            set_icon_visible(&toggle, MOON_ICON_SELECTOR, chrome.show_moon);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (attribute, theme);
    }
}

#[cfg(feature = "csr")]
fn current_theme(attribute: &str) -> Theme {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(attribute));
    Theme::from_attribute(raw.as_deref())
}

#[cfg(feature = "csr")]
fn toggle_elements() -> Vec<web_sys::Element> {
    crate::util::dom::query_all(TOGGLE_SELECTOR)
}

#[cfg(feature = "csr")]
fn set_icon_visible(toggle: &web_sys::Element, selector: &str, visible: bool) {
    let Ok(Some(icon)) = toggle.query_selector(selector) else {
        return;
    };
    let classes = icon.class_list();
    let _ = if visible { classes.remove_1(HIDDEN_CLASS) } else { classes.add_1(HIDDEN_CLASS) };
}
