use crate::incident::{Incident, Severity};
use crate::seed::seed_incidents;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Active severity filter. `All` keeps every incident, `Only` keeps exact
/// severity matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    pub fn matches(&self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(wanted) => *wanted == severity,
        }
    }

    /// Step All -> Low -> Medium -> High -> All.
    pub fn cycle(self) -> Self {
        match self {
            SeverityFilter::All => SeverityFilter::Only(Severity::Low),
            SeverityFilter::Only(Severity::Low) => SeverityFilter::Only(Severity::Medium),
            SeverityFilter::Only(Severity::Medium) => SeverityFilter::Only(Severity::High),
            SeverityFilter::Only(Severity::High) => SeverityFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeverityFilter::All => "All",
            SeverityFilter::Only(severity) => severity.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::NewestFirst => SortOrder::OldestFirst,
            SortOrder::OldestFirst => SortOrder::NewestFirst,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "Newest First",
            SortOrder::OldestFirst => "Oldest First",
        }
    }
}

/// Owns the authoritative incident list and the query state. The rendering
/// layer holds exactly one of these; there is no hidden global instance.
#[derive(Debug, Clone, Default)]
pub struct IncidentStore {
    incidents: Vec<Incident>,
    filter: SeverityFilter,
    sort_order: SortOrder,
    expanded: Option<u32>,
}

impl IncidentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session-start initialization from the fixed seed list.
    pub fn with_seed() -> Self {
        Self {
            incidents: seed_incidents(),
            ..Self::default()
        }
    }

    /// Append a new incident and return a reference to the stored record.
    ///
    /// The id is `max(existing ids, default 0) + 1` and `reported_at` is the
    /// time of the call. Non-empty title/description is the caller's
    /// contract, enforced by the form layer before this is reached.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> &Incident {
        self.add_with_timestamp(title, description, severity, Utc::now())
    }

    fn add_with_timestamp(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        reported_at: DateTime<Utc>,
    ) -> &Incident {
        let id = self.incidents.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let incident = Incident::new(id, title, description, severity, reported_at);
        debug!(id, severity = %incident.severity, "incident added");
        let idx = self.incidents.len();
        self.incidents.push(incident);
        &self.incidents[idx]
    }

    /// Deterministic-timestamp variant for tests.
    #[cfg(test)]
    pub fn add_at(
        &mut self,
        title: &str,
        description: &str,
        severity: Severity,
        reported_at: DateTime<Utc>,
    ) -> &Incident {
        self.add_with_timestamp(title, description, severity, reported_at)
    }

    pub fn set_filter(&mut self, filter: SeverityFilter) {
        self.filter = filter;
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.sort_order = sort_order;
    }

    /// Expand `id`, or collapse it if it is already the expanded one. At
    /// most one incident is expanded at a time.
    pub fn toggle_expanded(&mut self, id: u32) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn filter(&self) -> SeverityFilter {
        self.filter
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn expanded(&self) -> Option<u32> {
        self.expanded
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.incidents
            .iter()
            .filter(|i| i.severity == severity)
            .count()
    }

    /// The derived view: filter, then a stable sort by `reported_at`.
    /// Recomputed on every call; ties retain insertion order.
    pub fn view(&self) -> Vec<&Incident> {
        let mut rows: Vec<&Incident> = self
            .incidents
            .iter()
            .filter(|i| self.filter.matches(i.severity))
            .collect();

        match self.sort_order {
            SortOrder::NewestFirst => rows.sort_by(|a, b| b.reported_at.cmp(&a.reported_at)),
            SortOrder::OldestFirst => rows.sort_by(|a, b| a.reported_at.cmp(&b.reported_at)),
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn fixture() -> IncidentStore {
        // The three-record fixture: id 1 Low (Mar 15), id 2 High (Apr 1),
        // id 3 Low (Mar 20).
        let mut store = IncidentStore::new();
        store.add_at(
            "a",
            "first",
            Severity::Low,
            Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap(),
        );
        store.add_at(
            "b",
            "second",
            Severity::High,
            Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
        );
        store.add_at(
            "c",
            "third",
            Severity::Low,
            Utc.with_ymd_and_hms(2025, 3, 20, 0, 0, 0).unwrap(),
        );
        store
    }

    fn ids(view: &[&Incident]) -> Vec<u32> {
        view.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_add_assigns_monotonic_ids() {
        let mut store = IncidentStore::new();
        let first = store.add("t", "d", Severity::Low).id;
        assert_eq!(first, 1);
        let second = store.add("t", "d", Severity::High).id;
        assert_eq!(second, 2);
    }

    #[test]
    fn test_add_on_seeded_store() {
        let mut store = IncidentStore::with_seed();
        let id = store.add("t", "d", Severity::High).id;
        assert_eq!(id, 4);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_view_all_keeps_cardinality() {
        let store = fixture();
        assert_eq!(store.view().len(), store.len());
    }

    #[test]
    fn test_view_newest_first() {
        let store = fixture();
        assert_eq!(ids(&store.view()), vec![2, 3, 1]);
    }

    #[test]
    fn test_view_oldest_first() {
        let mut store = fixture();
        store.set_sort_order(SortOrder::OldestFirst);
        assert_eq!(ids(&store.view()), vec![1, 3, 2]);
    }

    #[test]
    fn test_filter_low_newest_first() {
        // Low filter plus newest-first over the fixture is [3, 1].
        let mut store = fixture();
        store.set_filter(SeverityFilter::Only(Severity::Low));
        assert_eq!(ids(&store.view()), vec![3, 1]);
    }

    #[test]
    fn test_filter_exact_subset() {
        let mut store = fixture();
        store.set_filter(SeverityFilter::Only(Severity::High));
        let view = store.view();
        assert_eq!(ids(&view), vec![2]);
        assert!(view.iter().all(|i| i.severity == Severity::High));

        store.set_filter(SeverityFilter::Only(Severity::Medium));
        assert!(store.view().is_empty());
    }

    #[test]
    fn test_add_then_oldest_first() {
        // Adding a fourth (latest) incident and sorting
        // oldest-first yields [1, 3, 2, 4].
        let mut store = fixture();
        store.add_at(
            "t",
            "d",
            Severity::High,
            Utc.with_ymd_and_hms(2025, 4, 10, 0, 0, 0).unwrap(),
        );
        store.set_sort_order(SortOrder::OldestFirst);
        assert_eq!(ids(&store.view()), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_view_is_idempotent() {
        let mut store = fixture();
        store.set_filter(SeverityFilter::Only(Severity::Low));
        let first = ids(&store.view());
        let second = ids(&store.view());
        assert_eq!(first, second);
    }

    #[test]
    fn test_view_does_not_mutate_collection() {
        let mut store = fixture();
        store.set_filter(SeverityFilter::Only(Severity::Low));
        let _ = store.view();

        // Widening the filter again shows the full collection untouched.
        store.set_filter(SeverityFilter::All);
        assert_eq!(store.len(), 3);
        assert_eq!(ids(&store.view()), vec![2, 3, 1]);
    }

    #[test]
    fn test_stable_sort_on_equal_timestamps() {
        let ts = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        let mut store = IncidentStore::new();
        store.add_at("a", "d", Severity::Low, ts);
        store.add_at("b", "d", Severity::Low, ts);
        store.add_at("c", "d", Severity::Low, ts);

        // Ties keep insertion order under both sort orders.
        assert_eq!(ids(&store.view()), vec![1, 2, 3]);
        store.set_sort_order(SortOrder::OldestFirst);
        assert_eq!(ids(&store.view()), vec![1, 2, 3]);
    }

    #[test]
    fn test_toggle_expanded_same_id_clears() {
        let mut store = fixture();
        store.toggle_expanded(2);
        assert_eq!(store.expanded(), Some(2));
        store.toggle_expanded(2);
        assert_eq!(store.expanded(), None);
    }

    #[test]
    fn test_toggle_expanded_switches_to_latest() {
        let mut store = fixture();
        store.toggle_expanded(1);
        store.toggle_expanded(3);
        assert_eq!(store.expanded(), Some(3));
    }

    #[test]
    fn test_filter_cycle_wraps() {
        let mut filter = SeverityFilter::All;
        for expected in [
            SeverityFilter::Only(Severity::Low),
            SeverityFilter::Only(Severity::Medium),
            SeverityFilter::Only(Severity::High),
            SeverityFilter::All,
        ] {
            filter = filter.cycle();
            assert_eq!(filter, expected);
        }
    }

    #[test]
    fn test_count_by_severity() {
        let store = fixture();
        assert_eq!(store.count_by_severity(Severity::Low), 2);
        assert_eq!(store.count_by_severity(Severity::Medium), 0);
        assert_eq!(store.count_by_severity(Severity::High), 1);
    }
}
