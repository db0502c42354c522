//! # Gestionale Fibra
//!
//! Client core for the Gestionale Fibra dashboard: fetches stats, recent
//! works and technicians from the backend API and renders them into the
//! page as stat cards, Chart.js charts and table rows.
//!
//! ## Modules
//!
//! - [`client`]: REST client over a pluggable [`Transport`]
//! - [`dashboard`]: Page-load loaders writing into a [`PageSurface`]
//! - [`charts`]: Chart.js configurations for the daily and operator charts
//! - [`tables`]: Table row markup and placeholders
//! - [`status`]: Status badges for works and tickets
//! - [`toast`]: Toast notifications over a [`ToastHost`]
//! - [`config`]: TOML configuration
//!
//! The crate never touches the DOM itself. The `gestionale-ui` crate binds
//! the ports ([`Transport`], [`PageSurface`], [`ToastHost`]) to the browser.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gestionale_fibra::{ApiClient, Config, Dashboard, ReqwestTransport};
//! # use gestionale_fibra::{ChartConfig, PageSurface, Slot};
//! # struct Stdout;
//! # impl PageSurface for Stdout {
//! #     fn contains(&self, _: Slot) -> bool { true }
//! #     fn set_text(&self, slot: Slot, text: &str) { println!("{}: {}", slot.dom_id(), text) }
//! #     fn set_html(&self, slot: Slot, html: &str) { println!("{}: {}", slot.dom_id(), html) }
//! #     fn draw_chart(&self, _: Slot, _: &ChartConfig) {}
//! # }
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::default();
//!     let transport = ReqwestTransport::new("http://localhost:8000");
//!     let client = ApiClient::new(transport, config.api.base.clone());
//!
//!     let dashboard = Dashboard::new(client, Stdout, &config);
//!     dashboard.load_all().await;
//! }
//! ```

pub mod actions;
pub mod charts;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod models;
pub mod nav;
pub mod page;
pub mod stats;
pub mod status;
pub mod tables;
pub mod toast;

#[cfg(test)]
mod testing;

// Re-export top-level types for convenience
pub use actions::{RowAction, RowCommands};

pub use charts::{daily_chart, operator_chart, ChartConfig, ChartKind};

pub use client::{
    ApiClient, HttpRequest, HttpResponse, Method, Transport, TransportError,
};

#[cfg(not(target_arch = "wasm32"))]
pub use client::ReqwestTransport;

pub use config::{Config, ConfigError};

pub use dashboard::{Dashboard, ListOutcome};

pub use error::{ApiError, ApiResult};

pub use format::{format_date, format_date_time};

pub use models::{DailyStat, OperatorStat, Page, StatsResponse, Technician, Work};

pub use page::{PageSurface, Slot};

pub use stats::StatTotals;

pub use status::{ticket_status_badge, work_status_badge, StatusBadge, TicketStatus, WorkStatus};

pub use toast::{Toast, ToastHost, ToastKind, Toaster};
