//! Test doubles for the transport and page ports.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::charts::ChartConfig;
use crate::client::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::page::{PageSurface, Slot};

enum Scripted {
    Reply(u16, String),
    Fail(String),
}

/// Transport answering from a fixed script keyed by URL.
/// Unscripted URLs answer 404.
#[derive(Default)]
pub struct StubTransport {
    script: HashMap<String, Scripted>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, url: &str, status: u16, body: &str) -> Self {
        self.script
            .insert(url.to_string(), Scripted::Reply(status, body.to_string()));
        self
    }

    pub fn fail(mut self, url: &str, message: &str) -> Self {
        self.script
            .insert(url.to_string(), Scripted::Fail(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let outcome = match self.script.get(&request.url) {
            Some(Scripted::Reply(status, body)) => Ok(HttpResponse::new(*status, body.clone())),
            Some(Scripted::Fail(message)) => Err(TransportError::new(message.clone())),
            None => Ok(HttpResponse::new(404, r#"{"detail": "Not Found"}"#)),
        };
        self.sent.borrow_mut().push(request);
        outcome
    }
}

/// In-memory page holding whatever was written to each present slot
#[derive(Default)]
pub struct MemoryPage {
    present: Vec<Slot>,
    pub text: RefCell<HashMap<Slot, String>>,
    pub html: RefCell<HashMap<Slot, String>>,
    pub charts: RefCell<HashMap<Slot, ChartConfig>>,
}

impl MemoryPage {
    /// A page carrying every dashboard slot
    pub fn full() -> Self {
        Self::with_slots(&Slot::ALL)
    }

    pub fn with_slots(slots: &[Slot]) -> Self {
        Self {
            present: slots.to_vec(),
            ..Self::default()
        }
    }

    pub fn text_of(&self, slot: Slot) -> Option<String> {
        self.text.borrow().get(&slot).cloned()
    }

    pub fn html_of(&self, slot: Slot) -> Option<String> {
        self.html.borrow().get(&slot).cloned()
    }
}

impl PageSurface for MemoryPage {
    fn contains(&self, slot: Slot) -> bool {
        self.present.contains(&slot)
    }

    fn set_text(&self, slot: Slot, text: &str) {
        if self.contains(slot) {
            self.text.borrow_mut().insert(slot, text.to_string());
        }
    }

    fn set_html(&self, slot: Slot, html: &str) {
        if self.contains(slot) {
            self.html.borrow_mut().insert(slot, html.to_string());
        }
    }

    fn draw_chart(&self, slot: Slot, config: &ChartConfig) {
        if self.contains(slot) {
            self.charts.borrow_mut().insert(slot, config.clone());
        }
    }
}
