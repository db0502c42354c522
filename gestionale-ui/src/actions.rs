//! Row Action Wiring
//!
//! Table rows carry `data-action`/`data-id` buttons. One delegated click
//! listener on the document routes them to the registered [`RowCommands`].

use gestionale_fibra::{RowAction, RowCommands};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

const ACTION_SELECTOR: &str = "[data-action]";

/// Handlers used until the detail pages exist: log and notify
pub fn default_commands() -> RowCommands {
    RowCommands::new()
        .on_view_work(|id| placeholder(RowAction::ViewWork(id)))
        .on_edit_technician(|id| placeholder(RowAction::EditTechnician(id)))
}

fn placeholder(action: RowAction) {
    let notice = action.placeholder_notice();
    tracing::info!(action = action.name(), id = action.id(), "{}", notice);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&notice);
    }
}

/// The action carried by the clicked element or its nearest ancestor
fn action_of(event: &Event) -> Option<RowAction> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(ACTION_SELECTOR).ok()??;
    let name = button.get_attribute("data-action")?;
    let id = button.get_attribute("data-id")?;
    RowAction::parse(&name, &id)
}

/// Route row button clicks on `document` to `dispatch`
pub fn listen<F>(document: &Document, dispatch: F) -> Result<(), JsValue>
where
    F: Fn(RowAction) + 'static,
{
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(action) = action_of(&event) {
            dispatch(action);
        }
    });
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // Lives as long as the page
    on_click.forget();
    Ok(())
}
