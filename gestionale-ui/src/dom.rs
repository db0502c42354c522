//! DOM Page Surface
//!
//! Binds dashboard slots to elements of the live document. Missing elements
//! are skipped silently; a page only carries the targets it shows.

use std::cell::RefCell;
use std::collections::HashMap;

use gestionale_fibra::{ChartConfig, PageSurface, Slot};
use web_sys::{Document, Element};

use crate::chart::{self, Chart};

/// The live document as a [`PageSurface`]
pub struct DomPage {
    document: Document,
    charts: RefCell<HashMap<Slot, Chart>>,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            charts: RefCell::new(HashMap::new()),
        }
    }

    fn element(&self, slot: Slot) -> Option<Element> {
        self.document.get_element_by_id(slot.dom_id())
    }

    /// Number of charts currently alive on the page
    #[cfg(test)]
    fn chart_count(&self) -> usize {
        self.charts.borrow().len()
    }
}

impl PageSurface for DomPage {
    fn contains(&self, slot: Slot) -> bool {
        self.element(slot).is_some()
    }

    fn set_text(&self, slot: Slot, text: &str) {
        if let Some(el) = self.element(slot) {
            el.set_text_content(Some(text));
        }
    }

    fn set_html(&self, slot: Slot, html: &str) {
        if let Some(el) = self.element(slot) {
            el.set_inner_html(html);
        }
    }

    fn draw_chart(&self, slot: Slot, config: &ChartConfig) {
        let Some(canvas) = self.element(slot) else {
            return;
        };

        // Chart.js refuses to reuse a canvas that still has a chart
        if let Some(previous) = self.charts.borrow_mut().remove(&slot) {
            previous.destroy();
        }

        match chart::draw(&canvas, config) {
            Ok(chart) => {
                self.charts.borrow_mut().insert(slot, chart);
            }
            Err(e) => {
                tracing::error!(slot = slot.dom_id(), error = ?e, "Failed to draw chart");
            }
        }
    }
}
