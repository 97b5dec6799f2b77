use chrono::{DateTime, Utc};
use dashboard_core::{IncidentStore, Severity};

/// One visible row of the incident list.
#[derive(Clone)]
pub struct IncidentRow {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub reported_at: DateTime<Utc>,
    pub expanded: bool,
}

/// Render model built fresh from the store every frame. The store's view is
/// the single source of ordering; nothing here is cached between frames.
#[derive(Clone)]
pub struct UiSnapshot {
    pub rows: Vec<IncidentRow>,
    pub total: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub filter_label: &'static str,
    pub sort_label: &'static str,
    pub recent: Vec<(Severity, String)>,
}

impl UiSnapshot {
    pub fn from_store(store: &IncidentStore) -> Self {
        let expanded = store.expanded();
        let rows: Vec<IncidentRow> = store
            .view()
            .into_iter()
            .map(|incident| IncidentRow {
                id: incident.id,
                title: incident.title.clone(),
                description: incident.description.clone(),
                severity: incident.severity,
                reported_at: incident.reported_at,
                expanded: expanded == Some(incident.id),
            })
            .collect();

        let recent = rows
            .iter()
            .take(3)
            .map(|row| (row.severity, row.title.clone()))
            .collect();

        Self {
            total: store.len(),
            low: store.count_by_severity(Severity::Low),
            medium: store.count_by_severity(Severity::Medium),
            high: store.count_by_severity(Severity::High),
            filter_label: store.filter().label(),
            sort_label: store.sort_order().label(),
            recent,
            rows,
        }
    }
}
