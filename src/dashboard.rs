//! Dashboard Loaders
//!
//! Fetch-then-render sequences for the dashboard page. Each loader owns a
//! disjoint set of slots, so the three page-load fetches run concurrently
//! without coordinating.
//!
//! Failure handling differs on purpose: a failed stats load is only logged
//! and leaves the cards and charts untouched, while a failed list load
//! replaces the table body with an error row.

use futures_util::future::join3;

use crate::actions::RowCommands;
use crate::charts::{daily_chart, operator_chart};
use crate::client::{ApiClient, Transport};
use crate::config::Config;
use crate::models::{Page, StatsResponse, Technician, Work};
use crate::page::{PageSurface, Slot};
use crate::stats::StatTotals;
use crate::tables::{technician_rows, work_rows, Placeholder};

pub const STATS_ENDPOINT: &str = "/stats";
pub const TECHNICIANS_ENDPOINT: &str = "/technicians";

/// What a list loader ended up rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    /// The target table is not on this page; nothing was fetched
    Skipped,
    /// The "not found" placeholder row
    Empty,
    /// One row per item
    Rendered(usize),
    /// The "load error" placeholder row
    Failed,
}

/// The dashboard page: an API client, an output surface and the row
/// commands wired into its tables
pub struct Dashboard<T, P> {
    client: ApiClient<T>,
    page: P,
    commands: RowCommands,
    works_endpoint: String,
}

impl<T: Transport, P: PageSurface> Dashboard<T, P> {
    pub fn new(client: ApiClient<T>, page: P, config: &Config) -> Self {
        Self {
            client,
            page,
            commands: RowCommands::new(),
            works_endpoint: config.recent_works_endpoint(),
        }
    }

    pub fn with_commands(mut self, commands: RowCommands) -> Self {
        self.commands = commands;
        self
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn commands(&self) -> &RowCommands {
        &self.commands
    }

    /// Run every page-load fetch concurrently
    pub async fn load_all(&self) -> (ListOutcome, ListOutcome) {
        let ((), works, technicians) = join3(
            self.load_stats(),
            self.load_recent_works(),
            self.load_technicians(),
        )
        .await;
        (works, technicians)
    }

    /// Fetch the stats payload and fill the stat cards and both charts
    pub async fn load_stats(&self) {
        match self.client.get::<StatsResponse>(STATS_ENDPOINT).await {
            Ok(stats) => self.render_stats(&stats),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load stats");
            }
        }
    }

    pub fn render_stats(&self, stats: &StatsResponse) {
        let totals = StatTotals::from_daily(&stats.daily_stats);

        let cards = [
            (Slot::TotalWorks, totals.total),
            (Slot::CompletedWorks, totals.completed),
            (Slot::PendingWorks, totals.pending),
            (Slot::InProgressWorks, totals.in_progress),
        ];
        for (slot, value) in cards {
            self.page.set_text(slot, &value.to_string());
        }

        if self.page.contains(Slot::DailyChart) {
            self.page
                .draw_chart(Slot::DailyChart, &daily_chart(&stats.daily_stats));
        }
        if self.page.contains(Slot::OperatorChart) {
            self.page
                .draw_chart(Slot::OperatorChart, &operator_chart(&stats.operator_stats));
        }

        tracing::debug!(
            days = stats.daily_stats.len(),
            operators = stats.operator_stats.len(),
            total = totals.total,
            "Rendered stats"
        );
    }

    /// Fill the recent works table
    pub async fn load_recent_works(&self) -> ListOutcome {
        if !self.page.contains(Slot::RecentWorksBody) {
            return ListOutcome::Skipped;
        }

        let (html, outcome) = match self.client.get::<Page<Work>>(&self.works_endpoint).await {
            Ok(page) => (
                work_rows(&page.items, &self.commands),
                list_outcome(page.items.len()),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load recent works");
                (Placeholder::LoadError.row_html(), ListOutcome::Failed)
            }
        };

        self.page.set_html(Slot::RecentWorksBody, &html);
        outcome
    }

    /// Fill the technicians table
    pub async fn load_technicians(&self) -> ListOutcome {
        if !self.page.contains(Slot::TechniciansBody) {
            return ListOutcome::Skipped;
        }

        let (html, outcome) = match self
            .client
            .get::<Page<Technician>>(TECHNICIANS_ENDPOINT)
            .await
        {
            Ok(page) => (
                technician_rows(&page.items, &self.commands),
                list_outcome(page.items.len()),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load technicians");
                (Placeholder::LoadError.row_html(), ListOutcome::Failed)
            }
        };

        self.page.set_html(Slot::TechniciansBody, &html);
        outcome
    }
}

fn list_outcome(count: usize) -> ListOutcome {
    if count == 0 {
        ListOutcome::Empty
    } else {
        ListOutcome::Rendered(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartKind;
    use crate::testing::{MemoryPage, StubTransport};
    use std::rc::Rc;

    const STATS: &str = r#"{
        "daily_stats": [
            {"date": "2024-03-04", "total_works": 6, "completed": 3, "pending": 2, "in_progress": 1, "refused": 0},
            {"date": "2024-03-05", "total_works": 9, "completed": 4, "pending": 1, "in_progress": 3, "refused": 1}
        ],
        "operator_stats": [
            {"operator": "TIM", "total_works": 10},
            {"operator": "Fastweb", "total_works": 5}
        ]
    }"#;

    const WORKS: &str = r#"{
        "items": [
            {"id": 1, "wr_number": "WR-1", "operator": "TIM", "customer_name": "Rossi", "scheduled_date": "2024-03-05", "status": "pending"},
            {"id": 2, "wr_number": "WR-2", "operator": "Fastweb", "customer_name": "Bianchi", "scheduled_date": null, "status": "completed"},
            {"id": 3, "wr_number": "WR-3", "operator": "TIM", "customer_name": "Verdi", "scheduled_date": "2024-03-06", "status": "in_progress"}
        ],
        "total": 3, "page": 1, "size": 10, "pages": 1
    }"#;

    const EMPTY: &str = r#"{"items": [], "total": 0, "page": 1, "size": 10, "pages": 0}"#;

    fn dashboard(
        stub: StubTransport,
        page: MemoryPage,
    ) -> Dashboard<Rc<StubTransport>, MemoryPage> {
        Dashboard::new(ApiClient::new(Rc::new(stub), "/api"), page, &Config::default())
            .with_commands(RowCommands::new().on_view_work(|_| {}).on_edit_technician(|_| {}))
    }

    fn rows(html: &str) -> usize {
        html.matches("<tr>").count()
    }

    #[tokio::test]
    async fn test_stats_fill_cards_and_charts() {
        let dash = dashboard(
            StubTransport::new().reply("/api/stats", 200, STATS),
            MemoryPage::full(),
        );

        dash.load_stats().await;

        let page = dash.page();
        assert_eq!(page.text_of(Slot::TotalWorks).as_deref(), Some("15"));
        assert_eq!(page.text_of(Slot::CompletedWorks).as_deref(), Some("7"));
        assert_eq!(page.text_of(Slot::PendingWorks).as_deref(), Some("3"));
        assert_eq!(page.text_of(Slot::InProgressWorks).as_deref(), Some("4"));

        let charts = page.charts.borrow();
        assert_eq!(charts[&Slot::DailyChart].kind, ChartKind::Bar);
        assert_eq!(charts[&Slot::DailyChart].data.labels, vec!["04/03/2024", "05/03/2024"]);
        assert_eq!(charts[&Slot::OperatorChart].kind, ChartKind::Doughnut);
        assert_eq!(charts[&Slot::OperatorChart].data.datasets[0].data, vec![10, 5]);
    }

    #[tokio::test]
    async fn test_stats_failure_leaves_page_untouched() {
        let dash = dashboard(
            StubTransport::new().reply("/api/stats", 500, "boom"),
            MemoryPage::full(),
        );

        dash.load_stats().await;

        assert!(dash.page().text.borrow().is_empty());
        assert!(dash.page().charts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_charts_skipped_without_targets() {
        let dash = dashboard(
            StubTransport::new().reply("/api/stats", 200, STATS),
            MemoryPage::with_slots(&[Slot::TotalWorks]),
        );

        dash.load_stats().await;

        assert_eq!(dash.page().text_of(Slot::TotalWorks).as_deref(), Some("15"));
        assert!(dash.page().charts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_recent_works_rows() {
        let stub = Rc::new(StubTransport::new().reply("/api/works?size=10", 200, WORKS));
        let dash = Dashboard::new(
            ApiClient::new(Rc::clone(&stub), "/api"),
            MemoryPage::full(),
            &Config::default(),
        )
        .with_commands(RowCommands::new().on_view_work(|_| {}));

        let outcome = dash.load_recent_works().await;

        assert_eq!(outcome, ListOutcome::Rendered(3));
        let html = dash.page().html_of(Slot::RecentWorksBody).unwrap();
        assert_eq!(rows(&html), 3);
        assert!(html.contains(r#"data-action="view-work" data-id="2""#));
        assert_eq!(stub.requests()[0].url, "/api/works?size=10");
    }

    #[tokio::test]
    async fn test_empty_lists_render_single_placeholder() {
        let dash = dashboard(
            StubTransport::new()
                .reply("/api/works?size=10", 200, EMPTY)
                .reply("/api/technicians", 200, EMPTY),
            MemoryPage::full(),
        );

        assert_eq!(dash.load_recent_works().await, ListOutcome::Empty);
        assert_eq!(dash.load_technicians().await, ListOutcome::Empty);

        let works = dash.page().html_of(Slot::RecentWorksBody).unwrap();
        assert_eq!(rows(&works), 1);
        assert!(works.contains(Placeholder::NoWorks.message()));

        let techs = dash.page().html_of(Slot::TechniciansBody).unwrap();
        assert_eq!(rows(&techs), 1);
        assert!(techs.contains(Placeholder::NoTechnicians.message()));
    }

    #[tokio::test]
    async fn test_rejected_fetch_renders_only_error_row() {
        let dash = dashboard(
            StubTransport::new()
                .fail("/api/works?size=10", "connection reset")
                .fail("/api/technicians", "connection reset"),
            MemoryPage::full(),
        );

        assert_eq!(dash.load_recent_works().await, ListOutcome::Failed);
        assert_eq!(dash.load_technicians().await, ListOutcome::Failed);

        for slot in [Slot::RecentWorksBody, Slot::TechniciansBody] {
            let html = dash.page().html_of(slot).unwrap();
            assert_eq!(html, Placeholder::LoadError.row_html());
            assert_eq!(rows(&html), 1);
        }
    }

    #[tokio::test]
    async fn test_http_error_renders_error_row() {
        let dash = dashboard(
            StubTransport::new().reply("/api/technicians", 502, "Bad Gateway"),
            MemoryPage::full(),
        );

        assert_eq!(dash.load_technicians().await, ListOutcome::Failed);
        assert!(dash
            .page()
            .html_of(Slot::TechniciansBody)
            .unwrap()
            .contains(Placeholder::LoadError.message()));
    }

    #[tokio::test]
    async fn test_missing_table_skips_fetch() {
        let stub = Rc::new(StubTransport::new());
        let dash = Dashboard::new(
            ApiClient::new(Rc::clone(&stub), "/api"),
            MemoryPage::with_slots(&[Slot::TotalWorks]),
            &Config::default(),
        );

        assert_eq!(dash.load_recent_works().await, ListOutcome::Skipped);
        assert_eq!(dash.load_technicians().await, ListOutcome::Skipped);
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_load_all_fills_disjoint_slots() {
        let technicians = r#"{"items": [
            {"id": 7, "name": "Paolo Gialli", "phone": null, "email": "paolo@example.it", "is_active": false}
        ]}"#;
        let dash = dashboard(
            StubTransport::new()
                .reply("/api/stats", 200, STATS)
                .reply("/api/works?size=10", 200, WORKS)
                .reply("/api/technicians", 200, technicians),
            MemoryPage::full(),
        );

        let (works, techs) = dash.load_all().await;

        assert_eq!(works, ListOutcome::Rendered(3));
        assert_eq!(techs, ListOutcome::Rendered(1));
        assert_eq!(dash.page().text_of(Slot::TotalWorks).as_deref(), Some("15"));
        let tech_html = dash.page().html_of(Slot::TechniciansBody).unwrap();
        assert!(tech_html.contains("paolo@example.it"));
        assert!(tech_html.contains("Inattivo"));
    }

    #[tokio::test]
    async fn test_custom_page_size() {
        let stub = Rc::new(StubTransport::new().reply("/api/works?size=25", 200, EMPTY));
        let mut config = Config::default();
        config.dashboard.recent_works_size = 25;
        let dash = Dashboard::new(ApiClient::new(Rc::clone(&stub), "/api"), MemoryPage::full(), &config);

        assert_eq!(dash.load_recent_works().await, ListOutcome::Empty);
        assert_eq!(stub.requests()[0].url, "/api/works?size=25");
    }
}
