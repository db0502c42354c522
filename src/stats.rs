//! Stat Card Totals
//!
//! Sums the per-day records of the stats payload into the four headline
//! counters shown at the top of the dashboard.

use crate::models::DailyStat;

/// Running totals across every daily record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatTotals {
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
    pub in_progress: u64,
}

impl StatTotals {
    pub fn from_daily(days: &[DailyStat]) -> Self {
        days.iter().fold(Self::default(), |acc, day| Self {
            total: acc.total + day.total_works,
            completed: acc.completed + day.completed,
            pending: acc.pending + day.pending,
            in_progress: acc.in_progress + day.in_progress,
        })
    }
}
