//! Page Script Exports
//!
//! The helpers page templates call from their own scripts, exported under
//! their JavaScript names. Endpoints are used verbatim, so callers pass the
//! full path (`/api/works/3`).

use std::cell::RefCell;

use gestionale_fibra::format::{format_date, format_date_time, loading_markup};
use gestionale_fibra::status::{ticket_status_badge, work_status_badge};
use gestionale_fibra::{ApiClient, ApiError, ToastKind, Toaster};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::settings;
use crate::toast::DomToastHost;
use crate::transport::FetchTransport;

thread_local! {
    static TOASTER: RefCell<Option<Toaster<DomToastHost>>> = const { RefCell::new(None) };
}

/// Install the page toaster; `showToast` is a no-op until then
pub fn install_toaster(toaster: Toaster<DomToastHost>) {
    TOASTER.with(|slot| *slot.borrow_mut() = Some(toaster));
}

fn client() -> ApiClient<FetchTransport> {
    ApiClient::new(FetchTransport, "")
}

fn to_js(value: &Value) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

fn from_js(data: JsValue) -> Result<Value, JsValue> {
    Ok(serde_wasm_bindgen::from_value(data)?)
}

fn js_error(error: ApiError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

#[wasm_bindgen(js_name = apiGet)]
pub async fn api_get(endpoint: String) -> Result<JsValue, JsValue> {
    let value: Value = client().get(&endpoint).await.map_err(js_error)?;
    to_js(&value)
}

#[wasm_bindgen(js_name = apiPost)]
pub async fn api_post(endpoint: String, data: JsValue) -> Result<JsValue, JsValue> {
    let body = from_js(data)?;
    let value: Value = client().post(&endpoint, &body).await.map_err(js_error)?;
    to_js(&value)
}

#[wasm_bindgen(js_name = apiPut)]
pub async fn api_put(endpoint: String, data: JsValue) -> Result<JsValue, JsValue> {
    let body = from_js(data)?;
    let value: Value = client().put(&endpoint, &body).await.map_err(js_error)?;
    to_js(&value)
}

/// Resolves to `true` on success
#[wasm_bindgen(js_name = apiDelete)]
pub async fn api_delete(endpoint: String) -> Result<bool, JsValue> {
    client().delete(&endpoint).await.map_err(js_error)?;
    Ok(true)
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date_js(value: Option<String>) -> String {
    format_date(value.as_deref())
}

#[wasm_bindgen(js_name = formatDateTime)]
pub fn format_date_time_js(value: Option<String>) -> String {
    format_date_time(value.as_deref())
}

/// Ticket status badge
#[wasm_bindgen(js_name = getStatusBadge)]
pub fn get_status_badge(status: &str) -> String {
    ticket_status_badge(status)
}

#[wasm_bindgen(js_name = getWorkStatusBadge)]
pub fn get_work_status_badge(status: &str) -> String {
    work_status_badge(status)
}

/// Persist an API base override, picked up on the next page load
#[wasm_bindgen(js_name = setApiBase)]
pub fn set_api_base(base: &str) {
    settings::set_api_base(base);
}

/// The message is shown as plain text; markup in it is escaped
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) {
    let kind = kind.as_deref().map(ToastKind::from_name).unwrap_or_default();
    TOASTER.with(|slot| match slot.borrow().as_ref() {
        Some(toaster) => {
            toaster.show(message, kind);
        }
        None => tracing::warn!("showToast called before the page was initialized"),
    });
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(element: &Element) {
    element.set_inner_html(loading_markup());
}

#[wasm_bindgen(js_name = confirmAction)]
pub fn confirm_action(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
