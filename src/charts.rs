//! Chart Configurations
//!
//! Declarative Chart.js configurations for the two dashboard charts. The
//! structs serialize to the exact JSON shape Chart.js expects; no drawing
//! happens here.

use serde::Serialize;

use crate::format::format_date;
use crate::models::{DailyStat, OperatorStat};

/// Operator doughnut palette
pub const OPERATOR_COLORS: [&str; 8] = [
    "#0d6efd", // Blue
    "#198754", // Green
    "#dc3545", // Red
    "#ffc107", // Yellow
    "#0dcaf0", // Cyan
    "#6f42c1", // Purple
    "#fd7e14", // Orange
    "#20c997", // Teal
];

const COMPLETED_COLOR: &str = "#198754";
const PENDING_COLOR: &str = "#ffc107";
const IN_PROGRESS_COLOR: &str = "#6f42c1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Doughnut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Bottom,
    Right,
}

/// Top-level Chart.js configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<u64>,
    pub background_color: Colors,
}

/// One color for a whole series, or one per data point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(&'static str),
    PerPoint(Vec<&'static str>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub stacked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: LegendPosition,
}

impl ChartOptions {
    fn with_legend(position: LegendPosition) -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            scales: None,
            plugins: Plugins {
                legend: Legend { position },
            },
        }
    }
}

fn series(
    days: &[DailyStat],
    label: &str,
    color: &'static str,
    value: fn(&DailyStat) -> u64,
) -> Dataset {
    Dataset {
        label: Some(label.to_string()),
        data: days.iter().map(value).collect(),
        background_color: Colors::Single(color),
    }
}

/// Stacked bars per day: completed, pending and in-progress works
pub fn daily_chart(days: &[DailyStat]) -> ChartConfig {
    let mut options = ChartOptions::with_legend(LegendPosition::Bottom);
    options.scales = Some(Scales {
        x: Axis {
            stacked: true,
            begin_at_zero: None,
        },
        y: Axis {
            stacked: true,
            begin_at_zero: Some(true),
        },
    });

    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: days.iter().map(|d| format_date(Some(d.date.as_str()))).collect(),
            datasets: vec![
                series(days, "Completati", COMPLETED_COLOR, |d| d.completed),
                series(days, "In Attesa", PENDING_COLOR, |d| d.pending),
                series(days, "In Corso", IN_PROGRESS_COLOR, |d| d.in_progress),
            ],
        },
        options,
    }
}

/// Doughnut of total works per operator
pub fn operator_chart(operators: &[OperatorStat]) -> ChartConfig {
    let colors = (0..operators.len())
        .map(|idx| OPERATOR_COLORS[idx % OPERATOR_COLORS.len()])
        .collect();

    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: operators.iter().map(|o| o.operator.clone()).collect(),
            datasets: vec![Dataset {
                label: None,
                data: operators.iter().map(|o| o.total_works).collect(),
                background_color: Colors::PerPoint(colors),
            }],
        },
        options: ChartOptions::with_legend(LegendPosition::Right),
    }
}
