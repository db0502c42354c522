//! Table Bodies
//!
//! Renders list payloads into `<tbody>` contents. An empty list or a failed
//! load becomes a single full-width placeholder row.

use crate::actions::{RowAction, RowCommands};
use crate::format::{escape_html, format_date, MISSING};
use crate::models::{Technician, Work};
use crate::status::{StatusBadge, WorkStatus};

/// Columns of both dashboard tables
pub const TABLE_COLUMNS: usize = 6;

/// Single-row messages that replace a table's content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    NoWorks,
    NoTechnicians,
    LoadError,
}

impl Placeholder {
    pub fn message(&self) -> &'static str {
        match self {
            Placeholder::NoWorks => "Nessun lavoro trovato",
            Placeholder::NoTechnicians => "Nessun tecnico trovato",
            Placeholder::LoadError => "Errore nel caricamento dei dati",
        }
    }

    fn text_class(&self) -> &'static str {
        match self {
            Placeholder::LoadError => "text-danger",
            _ => "text-muted",
        }
    }

    pub fn row_html(&self) -> String {
        format!(
            r#"<tr><td colspan="{}" class="text-center {} py-4">{}</td></tr>"#,
            TABLE_COLUMNS,
            self.text_class(),
            self.message()
        )
    }
}

fn action_cell(action: RowAction, commands: &RowCommands) -> String {
    if commands.handles(&action) {
        format!("<td>{}</td>", action.button_html())
    } else {
        "<td></td>".to_string()
    }
}

fn or_missing(value: Option<&str>) -> std::borrow::Cow<'_, str> {
    match value {
        Some(v) if !v.is_empty() => escape_html(v),
        _ => MISSING.into(),
    }
}

pub fn work_row(work: &Work, commands: &RowCommands) -> String {
    format!(
        "<tr><td><strong>{}</strong></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>{}</tr>",
        escape_html(&work.wr_number),
        escape_html(&work.operator),
        escape_html(&work.customer_name),
        escape_html(&format_date(work.scheduled_date.as_deref())),
        StatusBadge::resolve::<WorkStatus>(&work.status).html(),
        action_cell(RowAction::ViewWork(work.id), commands),
    )
}

pub fn technician_row(tech: &Technician, commands: &RowCommands) -> String {
    let (badge_class, badge_label) = if tech.is_active {
        ("bg-success", "Attivo")
    } else {
        ("bg-secondary", "Inattivo")
    };

    format!(
        r#"<tr><td>{}</td><td><strong>{}</strong></td><td>{}</td><td>{}</td><td><span class="badge {}">{}</span></td>{}</tr>"#,
        tech.id,
        escape_html(&tech.name),
        or_missing(tech.phone.as_deref()),
        or_missing(tech.email.as_deref()),
        badge_class,
        badge_label,
        action_cell(RowAction::EditTechnician(tech.id), commands),
    )
}

/// Body for the recent works table
pub fn work_rows(works: &[Work], commands: &RowCommands) -> String {
    if works.is_empty() {
        return Placeholder::NoWorks.row_html();
    }
    works.iter().map(|w| work_row(w, commands)).collect()
}

/// Body for the technicians table
pub fn technician_rows(technicians: &[Technician], commands: &RowCommands) -> String {
    if technicians.is_empty() {
        return Placeholder::NoTechnicians.row_html();
    }
    technicians
        .iter()
        .map(|t| technician_row(t, commands))
        .collect()
}
