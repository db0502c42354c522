//! Toast Notifications
//!
//! Transient notices stacked in a fixed corner container. The container is
//! created on first use; each toast hides itself after a delay and is
//! removed from the page once hidden.

use std::cell::Cell;

use crate::format::escape_html;

pub const CONTAINER_ID: &str = "toast-container";
pub const CONTAINER_CLASS: &str = "position-fixed bottom-0 end-0 p-3";
pub const CONTAINER_Z_INDEX: &str = "1100";

/// Autohide delay used when nothing else is configured
pub const DEFAULT_DELAY_MS: u32 = 3000;

/// Event fired by Bootstrap once a toast finished hiding
pub const HIDDEN_EVENT: &str = "hidden.bs.toast";

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Unrecognized names fall back to [`ToastKind::Info`]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }

    pub fn bg_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-success",
            ToastKind::Error => "bg-danger",
            ToastKind::Warning => "bg-warning text-dark",
            ToastKind::Info => "bg-info",
        }
    }
}

/// A single toast ready to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
    pub delay_ms: u32,
}

impl Toast {
    pub fn html(&self) -> String {
        format!(
            r#"<div id="{}" class="toast {} text-white" role="alert"><div class="toast-body d-flex justify-content-between align-items-center">{}<button type="button" class="btn-close btn-close-white ms-2" data-bs-dismiss="toast"></button></div></div>"#,
            self.id,
            self.kind.bg_class(),
            escape_html(&self.message)
        )
    }
}

/// The page side of toast display
pub trait ToastHost {
    fn has_container(&self) -> bool;

    fn create_container(&self);

    /// Append the toast to the container, show it, and arrange for its
    /// removal once [`HIDDEN_EVENT`] fires
    fn present(&self, toast: &Toast);
}

/// Creates toasts with unique ids and hands them to a [`ToastHost`]
#[derive(Debug)]
pub struct Toaster<H> {
    host: H,
    delay_ms: u32,
    next_id: Cell<u64>,
}

impl<H: ToastHost> Toaster<H> {
    pub fn new(host: H) -> Self {
        Self::with_delay(host, DEFAULT_DELAY_MS)
    }

    pub fn with_delay(host: H, delay_ms: u32) -> Self {
        Self {
            host,
            delay_ms,
            next_id: Cell::new(1),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Show a toast and return its element id
    pub fn show(&self, message: &str, kind: ToastKind) -> String {
        if !self.host.has_container() {
            self.host.create_container();
        }

        let seq = self.next_id.get();
        self.next_id.set(seq + 1);

        let toast = Toast {
            id: format!("toast-{}", seq),
            message: message.to_string(),
            kind,
            delay_ms: self.delay_ms,
        };
        self.host.present(&toast);
        toast.id
    }
}
