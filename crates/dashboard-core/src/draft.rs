use crate::incident::Severity;
use thiserror::Error;

/// Per-field validation failures for a report draft. The form layer rejects
/// these before anything reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Description is required")]
    EmptyDescription,
}

/// An in-progress incident report. Severity defaults to Medium, matching
/// the form's preselected radio.
#[derive(Debug, Clone)]
pub struct IncidentDraft {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Default for IncidentDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            severity: Severity::Medium,
        }
    }
}

impl IncidentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate all fields at once so the form can show every inline error
    /// in a single pass. Whitespace-only text counts as empty.
    pub fn validate(&self) -> Result<(), Vec<DraftError>> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(DraftError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            errors.push(DraftError::EmptyDescription);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draft_reports_both_fields() {
        let errors = IncidentDraft::new().validate().unwrap_err();
        assert_eq!(errors, vec![DraftError::EmptyTitle, DraftError::EmptyDescription]);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let draft = IncidentDraft {
            title: "   ".to_string(),
            description: "\t\n".to_string(),
            ..IncidentDraft::new()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_missing_description_only() {
        let draft = IncidentDraft {
            title: "Reward hacking in eval harness".to_string(),
            ..IncidentDraft::new()
        };
        assert_eq!(draft.validate().unwrap_err(), vec![DraftError::EmptyDescription]);
    }

    #[test]
    fn test_complete_draft_is_valid() {
        let draft = IncidentDraft {
            title: "t".to_string(),
            description: "d".to_string(),
            severity: Severity::Low,
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_default_severity_is_medium() {
        assert_eq!(IncidentDraft::new().severity, Severity::Medium);
    }
}
