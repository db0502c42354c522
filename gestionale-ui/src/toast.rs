//! Toast Host
//!
//! Shows core toasts as Bootstrap toasts inside a fixed corner container.

use gestionale_fibra::toast::{
    Toast, ToastHost, CONTAINER_CLASS, CONTAINER_ID, CONTAINER_Z_INDEX, HIDDEN_EVENT,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::bootstrap;

#[derive(Serialize)]
struct ToastOptions {
    delay: u32,
}

/// [`ToastHost`] writing into the live document
pub struct DomToastHost {
    document: Document,
}

impl DomToastHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn container(&self) -> Option<Element> {
        self.document.get_element_by_id(CONTAINER_ID)
    }

    fn build_container(&self) -> Result<(), JsValue> {
        let container = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()?;
        container.set_id(CONTAINER_ID);
        container.set_class_name(CONTAINER_CLASS);
        container.style().set_property("z-index", CONTAINER_Z_INDEX)?;

        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&container)?;
        Ok(())
    }

    fn show_toast(&self, toast: &Toast) -> Result<(), JsValue> {
        let container = self
            .container()
            .ok_or_else(|| JsValue::from_str("toast container missing"))?;
        container.insert_adjacent_html("beforeend", &toast.html())?;

        let element = self
            .document
            .get_element_by_id(&toast.id)
            .ok_or_else(|| JsValue::from_str("toast element missing"))?;

        // Registered before showing so a zero-delay hide is still observed
        let target = element.clone();
        let on_hidden = Closure::once_into_js(move || target.remove());
        element.add_event_listener_with_callback(HIDDEN_EVENT, on_hidden.unchecked_ref())?;

        let options = serde_wasm_bindgen::to_value(&ToastOptions {
            delay: toast.delay_ms,
        })?;
        bootstrap::Toast::new(&element, &options)?.show();
        Ok(())
    }
}

impl ToastHost for DomToastHost {
    fn has_container(&self) -> bool {
        self.container().is_some()
    }

    fn create_container(&self) {
        if let Err(e) = self.build_container() {
            tracing::error!(error = ?e, "Failed to create toast container");
        }
    }

    fn present(&self, toast: &Toast) {
        if let Err(e) = self.show_toast(toast) {
            tracing::error!(toast = %toast.id, error = ?e, "Failed to show toast");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gestionale_fibra::{ToastKind, Toaster};
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_container_created_once_and_hidden_toasts_removed() {
        let doc = document();
        let toaster = Toaster::new(DomToastHost::new(doc.clone()));

        let first = toaster.show("Salvato", ToastKind::Success);
        let second = toaster.show("Errore", ToastKind::Error);

        assert_eq!(doc.query_selector_all("#toast-container").unwrap().length(), 1);
        let container = doc.get_element_by_id(CONTAINER_ID).unwrap();
        assert_eq!(container.child_element_count(), 2);

        let element = doc.get_element_by_id(&first).unwrap();
        element
            .dispatch_event(&Event::new(HIDDEN_EVENT).unwrap())
            .unwrap();

        assert!(doc.get_element_by_id(&first).is_none());
        assert!(doc.get_element_by_id(&second).is_some());

        container.remove();
    }
}
