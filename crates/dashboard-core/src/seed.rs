use crate::incident::{Incident, Severity};
use chrono::{TimeZone, Utc};

/// Fixed seed list loaded at session start. Ids are assigned 1..N so that
/// the next added incident always gets `max + 1`.
pub fn seed_incidents() -> Vec<Incident> {
    vec![
        Incident::new(
            1,
            "Biased Recommendation Algorithm",
            "Algorithm consistently favored certain demographics...",
            Severity::Medium,
            Utc.with_ymd_and_hms(2025, 3, 15, 10, 0, 0).unwrap(),
        ),
        Incident::new(
            2,
            "LLM Hallucination in Critical Info",
            "LLM provided incorrect safety procedure information...",
            Severity::High,
            Utc.with_ymd_and_hms(2025, 4, 1, 14, 30, 0).unwrap(),
        ),
        Incident::new(
            3,
            "Minor Data Leak via Chatbot",
            "Chatbot inadvertently exposed non-sensitive user metadata...",
            Severity::Low,
            Utc.with_ymd_and_hms(2025, 3, 20, 9, 15, 0).unwrap(),
        ),
    ]
}
