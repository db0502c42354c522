//! Status Badges
//!
//! Maps raw status strings to colored badges. Two independent vocabularies
//! exist: the work-order lifecycle used by the dashboard, and the ticket
//! lifecycle used by the shared page scripts. Unknown values never fail;
//! they render the raw string with a neutral class.

use crate::format::escape_html;

/// Class used for statuses outside the known vocabulary
pub const FALLBACK_CLASS: &str = "bg-secondary";

/// A status vocabulary with a fixed label/class per value
pub trait StatusSet: Sized + Copy + 'static {
    /// Classes every badge of this set carries
    const BASE_CLASS: &'static str;

    /// Every member of the set, in display order
    const ALL: &'static [Self];

    /// Wire value, as sent by the backend
    fn as_str(&self) -> &'static str;

    /// Italian display label
    fn label(&self) -> &'static str;

    /// Color class appended to [`Self::BASE_CLASS`]
    fn class(&self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == raw)
    }
}

/// Work order lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkStatus {
    Pending,
    Assigned,
    Accepted,
    InProgress,
    Completed,
    Refused,
    Cancelled,
}

impl StatusSet for WorkStatus {
    const BASE_CLASS: &'static str = "badge badge-status";

    const ALL: &'static [Self] = &[
        WorkStatus::Pending,
        WorkStatus::Assigned,
        WorkStatus::Accepted,
        WorkStatus::InProgress,
        WorkStatus::Completed,
        WorkStatus::Refused,
        WorkStatus::Cancelled,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::Pending => "pending",
            WorkStatus::Assigned => "assigned",
            WorkStatus::Accepted => "accepted",
            WorkStatus::InProgress => "in_progress",
            WorkStatus::Completed => "completed",
            WorkStatus::Refused => "refused",
            WorkStatus::Cancelled => "cancelled",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            WorkStatus::Pending => "In Attesa",
            WorkStatus::Assigned => "Assegnato",
            WorkStatus::Accepted => "Accettato",
            WorkStatus::InProgress => "In Corso",
            WorkStatus::Completed => "Completato",
            WorkStatus::Refused => "Rifiutato",
            WorkStatus::Cancelled => "Annullato",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            WorkStatus::Pending => "badge-pending",
            WorkStatus::Assigned => "badge-assigned",
            WorkStatus::Accepted => "badge-accepted",
            WorkStatus::InProgress => "badge-in-progress",
            WorkStatus::Completed => "badge-completed",
            WorkStatus::Refused => "badge-refused",
            WorkStatus::Cancelled => "badge-cancelled",
        }
    }
}

/// Ticket lifecycle used by the shared page scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    Open,
    InProgress,
    Paused,
    Closed,
}

impl StatusSet for TicketStatus {
    const BASE_CLASS: &'static str = "badge";

    const ALL: &'static [Self] = &[
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Paused,
        TicketStatus::Closed,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Paused => "paused",
            TicketStatus::Closed => "closed",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Aperto",
            TicketStatus::InProgress => "In Corso",
            TicketStatus::Paused => "In Pausa",
            TicketStatus::Closed => "Chiuso",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            TicketStatus::Open => "bg-success",
            TicketStatus::InProgress => "bg-warning text-dark",
            TicketStatus::Paused => "bg-secondary",
            TicketStatus::Closed => "bg-info",
        }
    }
}

/// A resolved badge: what to show and how to color it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub class: &'static str,
    base_class: &'static str,
}

impl StatusBadge {
    /// Resolve a raw status against the vocabulary `S`
    pub fn resolve<S: StatusSet>(raw: &str) -> Self {
        match S::parse(raw) {
            Some(status) => Self {
                label: status.label().to_string(),
                class: status.class(),
                base_class: S::BASE_CLASS,
            },
            None => Self {
                label: raw.to_string(),
                class: FALLBACK_CLASS,
                base_class: S::BASE_CLASS,
            },
        }
    }

    pub fn html(&self) -> String {
        format!(
            r#"<span class="{} {}">{}</span>"#,
            self.base_class,
            self.class,
            escape_html(&self.label)
        )
    }
}

/// Badge markup for a work order status
pub fn work_status_badge(raw: &str) -> String {
    StatusBadge::resolve::<WorkStatus>(raw).html()
}

/// Badge markup for a ticket status
pub fn ticket_status_badge(raw: &str) -> String {
    StatusBadge::resolve::<TicketStatus>(raw).html()
}
