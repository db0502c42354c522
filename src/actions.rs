//! Row Actions
//!
//! Table rows expose their actions as `data-action`/`data-id` attributes
//! instead of inline handlers. A [`RowCommands`] registry is handed to the
//! row renderer (only registered actions get a button) and later receives
//! the parsed [`RowAction`] from the page's click listener.

use std::fmt;

/// An action triggered from a table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    ViewWork(i64),
    EditTechnician(i64),
}

impl RowAction {
    /// Value of the `data-action` attribute
    pub fn name(&self) -> &'static str {
        match self {
            RowAction::ViewWork(_) => "view-work",
            RowAction::EditTechnician(_) => "edit-technician",
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            RowAction::ViewWork(id) | RowAction::EditTechnician(id) => *id,
        }
    }

    /// Bootstrap icon shown on the action button
    pub fn icon(&self) -> &'static str {
        match self {
            RowAction::ViewWork(_) => "bi-eye",
            RowAction::EditTechnician(_) => "bi-pencil",
        }
    }

    /// Rebuild an action from the attributes of a clicked element
    pub fn parse(name: &str, id: &str) -> Option<Self> {
        let id = id.trim().parse().ok()?;
        match name {
            "view-work" => Some(RowAction::ViewWork(id)),
            "edit-technician" => Some(RowAction::EditTechnician(id)),
            _ => None,
        }
    }

    /// Message shown until the detail/edit dialogs exist
    pub fn placeholder_notice(&self) -> String {
        match self {
            RowAction::ViewWork(id) => format!("Visualizza lavoro ID: {}", id),
            RowAction::EditTechnician(id) => format!("Modifica tecnico ID: {}", id),
        }
    }

    /// Button markup carrying the action attributes
    pub fn button_html(&self) -> String {
        format!(
            r#"<button class="btn btn-sm btn-outline-primary btn-action" data-action="{}" data-id="{}"><i class="bi {}"></i></button>"#,
            self.name(),
            self.id(),
            self.icon()
        )
    }
}

type Handler = Box<dyn Fn(i64)>;

/// Registered handlers for row actions
#[derive(Default)]
pub struct RowCommands {
    view_work: Option<Handler>,
    edit_technician: Option<Handler>,
}

impl RowCommands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_view_work(mut self, handler: impl Fn(i64) + 'static) -> Self {
        self.view_work = Some(Box::new(handler));
        self
    }

    pub fn on_edit_technician(mut self, handler: impl Fn(i64) + 'static) -> Self {
        self.edit_technician = Some(Box::new(handler));
        self
    }

    fn handler(&self, action: &RowAction) -> Option<&Handler> {
        match action {
            RowAction::ViewWork(_) => self.view_work.as_ref(),
            RowAction::EditTechnician(_) => self.edit_technician.as_ref(),
        }
    }

    /// Whether a button should be rendered for this action
    pub fn handles(&self, action: &RowAction) -> bool {
        self.handler(action).is_some()
    }

    /// Run the handler for `action`. Returns false when none is registered.
    pub fn dispatch(&self, action: RowAction) -> bool {
        match self.handler(&action) {
            Some(handler) => {
                tracing::debug!(action = action.name(), id = action.id(), "Row action");
                handler(action.id());
                true
            }
            None => {
                tracing::warn!(action = action.name(), id = action.id(), "No handler for row action");
                false
            }
        }
    }
}

impl fmt::Debug for RowCommands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowCommands")
            .field("view_work", &self.view_work.is_some())
            .field("edit_technician", &self.edit_technician.is_some())
            .finish()
    }
}
