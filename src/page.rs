//! Page Output Port
//!
//! The dashboard writes into a fixed set of named DOM targets. [`Slot`]
//! names them and [`PageSurface`] is the port the loaders write through, so
//! the browser DOM and in-memory test pages are interchangeable.

use crate::charts::ChartConfig;

/// A named render target on the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    TotalWorks,
    CompletedWorks,
    PendingWorks,
    InProgressWorks,
    DailyChart,
    OperatorChart,
    RecentWorksBody,
    TechniciansBody,
}

impl Slot {
    pub const ALL: [Slot; 8] = [
        Slot::TotalWorks,
        Slot::CompletedWorks,
        Slot::PendingWorks,
        Slot::InProgressWorks,
        Slot::DailyChart,
        Slot::OperatorChart,
        Slot::RecentWorksBody,
        Slot::TechniciansBody,
    ];

    /// Element id the slot is bound to
    pub fn dom_id(&self) -> &'static str {
        match self {
            Slot::TotalWorks => "totalWorks",
            Slot::CompletedWorks => "completedWorks",
            Slot::PendingWorks => "pendingWorks",
            Slot::InProgressWorks => "inProgressWorks",
            Slot::DailyChart => "dailyChart",
            Slot::OperatorChart => "operatorChart",
            Slot::RecentWorksBody => "recentWorksBody",
            Slot::TechniciansBody => "techniciansBody",
        }
    }
}

/// Where rendered output goes.
///
/// Every slot is optional: a page family only carries the targets it shows.
/// Writes to an absent slot are ignored.
pub trait PageSurface {
    fn contains(&self, slot: Slot) -> bool;

    /// Replace the slot's text content
    fn set_text(&self, slot: Slot, text: &str);

    /// Replace the slot's markup
    fn set_html(&self, slot: Slot, html: &str);

    /// Draw a chart into the slot, replacing any chart already there
    fn draw_chart(&self, slot: Slot, config: &ChartConfig);
}
