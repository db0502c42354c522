//! View Models
//!
//! Transient shapes deserialized from the backend's JSON responses. Nothing
//! here is persisted or mutated; every render starts from a fresh fetch.

use serde::{Deserialize, Serialize};

// ============ Collections ============

/// Paged collection returned by list endpoints
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub pages: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============ Rows ============

/// Work order as shown in the recent works table
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Work {
    pub id: i64,
    pub wr_number: String,
    /// Telecom operator the work is assigned under
    pub operator: String,
    pub customer_name: String,
    #[serde(default)]
    pub scheduled_date: Option<String>,
    /// Raw status string; unknown values are rendered as-is
    pub status: String,
}

/// Technician as shown in the technicians table
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Technician {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

// ============ Statistics ============

/// Work counts for a single scheduled date
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DailyStat {
    pub date: String,
    #[serde(default)]
    pub total_works: u64,
    #[serde(default)]
    pub completed: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub in_progress: u64,
    #[serde(default)]
    pub refused: u64,
}

/// Work counts for a telecom operator
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct OperatorStat {
    pub operator: String,
    #[serde(default)]
    pub total_works: u64,
    #[serde(default)]
    pub completed: u64,
    #[serde(default)]
    pub completion_rate: f64,
}

/// Payload of `GET /api/stats`
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct StatsResponse {
    #[serde(default)]
    pub daily_stats: Vec<DailyStat>,
    #[serde(default)]
    pub operator_stats: Vec<OperatorStat>,
}
