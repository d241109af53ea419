//! Thin web-sys helpers for the static host pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host HTML owns the containers; these helpers find them by id, clear
//! them and mount Leptos views inside. A missing container is not an error:
//! the caller simply renders nothing.

use leptos::prelude::*;

/// Element id receiving the current year.
pub const FOOTER_YEAR_ID: &str = "footer-year";

/// Replace the children of `#container_id` with `view`.
///
/// Returns `false` (and renders nothing) if the container is absent or this
/// is not a browser build.
pub fn mount_into<F, N>(container_id: &str, view: F) -> bool
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(container) = element_by_id(container_id) else {
            log::debug!("container #{container_id} not found; skipping render");
            return false;
        };
        let Ok(container) = container.dyn_into::<web_sys::HtmlElement>() else {
            return false;
        };
        container.set_inner_html("");
        leptos::mount::mount_to(container, view).forget();
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (container_id, view);
        false
    }
}

/// Write the current calendar year into `#footer-year`, if present.
pub fn set_footer_year() {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = element_by_id(FOOTER_YEAR_ID) {
            let year = js_sys::Date::new_0().get_full_year();
            el.set_text_content(Some(&year.to_string()));
        }
    }
}

/// Read `data-{name}` from `<body>`.
pub fn body_data(name: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let body = web_sys::window()?.document()?.body()?;
        body.get_attribute(&format!("data-{name}"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}

/// Add classes to `#container_id`, if present.
pub fn add_classes(container_id: &str, classes: &[&str]) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = element_by_id(container_id) else {
            return;
        };
        let list = el.class_list();
        for class in classes {
            let _ = list.add_1(class);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (container_id, classes);
    }
}

#[cfg(feature = "csr")]
pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// All elements matching `selector`, in document order.
#[cfg(feature = "csr")]
pub fn query_all(selector: &str) -> Vec<web_sys::Element> {
    use wasm_bindgen::JsCast as _;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}
