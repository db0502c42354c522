//! Gestionale Fibra Dashboard
//!
//! Browser adapter for the dashboard client core, compiled to WebAssembly.
//!
//! # Features
//!
//! - Stat cards and Chart.js charts filled from `/api/stats`
//! - Recent works and technicians tables
//! - Bootstrap tooltips, popovers and toast notifications
//! - Shared helpers (`apiGet`, `formatDate`, `showToast`, ...) for page scripts
//!
//! # Architecture
//!
//! Pages are server-rendered templates. This module enhances whatever
//! targets the current page carries; all fetching and rendering logic lives
//! in `gestionale-fibra`, wired here to `fetch`, the DOM and Bootstrap.

use std::rc::Rc;

use gestionale_fibra::{ApiClient, Dashboard, Toaster};
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState};

mod actions;
mod bootstrap;
mod chart;
mod dom;
mod exports;
mod settings;
mod toast;
mod transport;

use dom::DomPage;
use toast::DomToastHost;
use transport::FetchTransport;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = settings::load();
    wasm_logger::init(wasm_logger::Config::new(settings::log_level(&config)));

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == DocumentReadyState::Loading {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || init(doc, config));
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        init(document, config);
    }

    Ok(())
}

fn init(document: Document, config: gestionale_fibra::Config) {
    let path = document
        .location()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_default();
    bootstrap::enhance_page(&document, &path);

    exports::install_toaster(Toaster::with_delay(
        DomToastHost::new(document.clone()),
        config.toast.delay_ms,
    ));

    let client = ApiClient::new(FetchTransport, config.api.base.clone());
    let dashboard = Rc::new(
        Dashboard::new(client, DomPage::new(document.clone()), &config)
            .with_commands(actions::default_commands()),
    );

    let dispatcher = Rc::clone(&dashboard);
    if let Err(e) = actions::listen(&document, move |action| {
        dispatcher.commands().dispatch(action);
    }) {
        tracing::error!(error = ?e, "Failed to listen for row actions");
    }

    log::info!("Gestionale Fibra dashboard started on {}", path);

    wasm_bindgen_futures::spawn_local(async move {
        let (works, technicians) = dashboard.load_all().await;
        tracing::debug!(?works, ?technicians, "Dashboard loaded");
    });
}
