//! Bootstrap Bindings
//!
//! The Bootstrap 5 components this crate drives, plus the page-load
//! enhancements (tooltips, popovers, active nav link).

use gestionale_fibra::nav::{
    is_active_link, ACTIVE_CLASS, NAV_LINK_SELECTOR, POPOVER_SELECTOR, TOOLTIP_SELECTOR,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Popover;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Popover, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Toast;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element, options: &JsValue) -> Result<Toast, JsValue>;

    #[wasm_bindgen(method)]
    pub fn show(this: &Toast);
}

/// Elements matching `selector`, in document order
pub fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach tooltips and popovers, then mark the active nav link
pub fn enhance_page(document: &Document, current_path: &str) {
    let mut failures = 0;

    for el in select_all(document, TOOLTIP_SELECTOR) {
        if let Err(e) = Tooltip::new(&el) {
            tracing::warn!(error = ?e, "Failed to create tooltip");
            failures += 1;
        }
    }

    for el in select_all(document, POPOVER_SELECTOR) {
        if let Err(e) = Popover::new(&el) {
            tracing::warn!(error = ?e, "Failed to create popover");
            failures += 1;
        }
    }

    let active = mark_active_links(document, current_path);

    tracing::debug!(path = current_path, active, failures, "Page enhanced");
}

/// Add the active class to every nav link pointing at `current_path`.
/// Returns how many links were marked.
pub fn mark_active_links(document: &Document, current_path: &str) -> usize {
    let mut marked = 0;
    for link in select_all(document, NAV_LINK_SELECTOR) {
        let href = link.get_attribute("href");
        if is_active_link(href.as_deref(), current_path)
            && link.class_list().add_1(ACTIVE_CLASS).is_ok()
        {
            marked += 1;
        }
    }
    marked
}
