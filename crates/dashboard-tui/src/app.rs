use crate::keys::TuiAction;
use dashboard_core::{DraftError, IncidentDraft, IncidentStore, Severity};
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Title,
    Description,
    Severity,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Severity,
            FormField::Severity => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Severity,
            FormField::Description => FormField::Title,
            FormField::Severity => FormField::Description,
        }
    }
}

/// State of the "Report New Incident" form while it is open.
pub struct FormState {
    pub draft: IncidentDraft,
    pub focus: FormField,
    pub errors: Vec<DraftError>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            draft: IncidentDraft::new(),
            focus: FormField::Title,
            errors: Vec::new(),
        }
    }

    pub fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Title => Some(&mut self.draft.title),
            FormField::Description => Some(&mut self.draft.description),
            FormField::Severity => None,
        }
    }

    /// Step the severity radio left/right, clamping at the ends like the
    /// original three-button row.
    pub fn step_severity(&mut self, delta: i32) {
        let idx = Severity::ALL
            .iter()
            .position(|s| *s == self.draft.severity)
            .unwrap_or(1) as i32;
        let idx = (idx + delta).clamp(0, Severity::ALL.len() as i32 - 1) as usize;
        self.draft.severity = Severity::ALL[idx];
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct DashboardApp {
    pub store: IncidentStore,
    pub selected: usize,
    pub form: Option<FormState>,
    pub show_help: bool,
    pub notification: Option<(String, Instant)>,
}

impl DashboardApp {
    pub fn new(store: IncidentStore) -> Self {
        Self {
            store,
            selected: 0,
            form: None,
            show_help: false,
            notification: None,
        }
    }

    /// Number of rows in the current derived view.
    pub fn visible_len(&self) -> usize {
        self.store.view().len()
    }

    /// Dispatch a browse-mode action. Returns true if the app should quit.
    pub fn handle_action(&mut self, action: TuiAction) -> bool {
        match action {
            TuiAction::Quit => return true,
            TuiAction::NewReport => {
                // Same button toggles the form open and closed.
                self.form = match self.form {
                    Some(_) => None,
                    None => Some(FormState::new()),
                };
            }
            TuiAction::CycleFilter => {
                self.store.set_filter(self.store.filter().cycle());
                self.selected = 0;
            }
            TuiAction::ToggleSort => {
                self.store.set_sort_order(self.store.sort_order().toggle());
            }
            TuiAction::MoveSelectionUp => {
                self.selected = self.selected.saturating_sub(1);
            }
            TuiAction::MoveSelectionDown => {
                let len = self.visible_len();
                if len > 0 && self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            TuiAction::ToggleDetails => {
                let id = self.store.view().get(self.selected).map(|i| i.id);
                if let Some(id) = id {
                    self.store.toggle_expanded(id);
                }
            }
            TuiAction::ToggleHelp => {
                self.show_help = !self.show_help;
            }
        }
        false
    }

    /// Keep the selection inside the view after a filter change or add.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Validate the open form; on success add the incident and close the
    /// form, otherwise keep it open with inline errors.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        match form.draft.validate() {
            Ok(()) => {
                let draft = form.draft.clone();
                let id = self
                    .store
                    .add(draft.title.trim(), draft.description.trim(), draft.severity)
                    .id;
                info!(id, severity = %draft.severity, "incident reported");
                self.form = None;
                self.notification = Some((format!("✓ Incident #{} reported", id), Instant::now()));
            }
            Err(errors) => {
                form.errors = errors;
            }
        }
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Drop the notification once it has been on screen for 3 seconds.
    pub fn expire_notification(&mut self) {
        if let Some((_, shown_at)) = &self.notification {
            if shown_at.elapsed().as_secs() >= 3 {
                self.notification = None;
            }
        }
    }
}
