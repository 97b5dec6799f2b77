use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// All severities, low to high. Used for stat cards and the form radio.
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A reported AI-safety incident. Immutable once created; there is no
/// update or delete operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub reported_at: DateTime<Utc>,
}

impl Incident {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        reported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            severity,
            reported_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_severity_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Severity::Low).unwrap(), "\"Low\"");
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"Medium\"");
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"High\"");
    }

    #[test]
    fn test_incident_roundtrip() {
        let incident = Incident::new(
            7,
            "Prompt injection in support bot",
            "User-supplied text overrode the system prompt",
            Severity::High,
            Utc.with_ymd_and_hms(2025, 5, 2, 12, 0, 0).unwrap(),
        );
        let json = serde_json::to_string(&incident).unwrap();
        let back: Incident = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, 7);
        assert_eq!(back.severity, Severity::High);
        assert_eq!(back.reported_at, incident.reported_at);
    }
}
