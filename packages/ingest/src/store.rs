//! Snapshot stores for the shared report and hazard collections.
//!
//! Both algorithms downstream (hotspot aggregation, risk scoring)
//! assume a stable input list for the duration of one pass. These
//! stores guarantee that with atomically swapped immutable snapshots:
//! readers clone an `Arc` and keep the exact collection they started
//! with, no matter how many writes land mid-pass. Writers clone the
//! current vector, apply their change, and swap the `Arc` under the
//! write lock, so there is never in-place mutation of a shared list.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use coastwatch_hazard_models::{HazardCategory, ReportSeverity};
use coastwatch_report_models::{EnvHazard, Report};
use uuid::Uuid;

/// Filter for querying the report collection.
///
/// All fields are optional; an empty query returns the full snapshot.
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    /// Only reports observed strictly after this instant.
    pub newer_than: Option<DateTime<Utc>>,
    /// Only reports at or above this severity.
    pub severity_min: Option<ReportSeverity>,
    /// Only reports with this reporter-supplied hazard category.
    pub hazard_type: Option<HazardCategory>,
    /// Only moderator-verified reports.
    pub verified_only: bool,
}

/// Store for submitted hazard reports.
#[derive(Debug, Default)]
pub struct ReportStore {
    inner: RwLock<Arc<Vec<Report>>>,
}

impl ReportStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current snapshot.
    ///
    /// The returned `Arc` stays valid and unchanged for as long as the
    /// caller holds it; later writes produce new snapshots instead of
    /// mutating this one.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Report>> {
        Arc::clone(&self.inner.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Adds a report to the store.
    pub fn insert(&self, report: Report) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = guard.as_ref().clone();
        next.push(report);
        *guard = Arc::new(next);
    }

    /// Flips the moderation flag on a stored report.
    ///
    /// Returns false when no report has the given ID. This is the only
    /// mutation a stored report ever sees.
    pub fn set_verified(&self, id: Uuid, verified: bool) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = guard.as_ref().clone();

        let Some(report) = next.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        report.verified = verified;

        *guard = Arc::new(next);
        true
    }

    /// Drops reports observed at or before the cutoff. Returns how many
    /// were removed.
    pub fn retain_newer_than(&self, cutoff: DateTime<Utc>) -> usize {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = guard.len();

        let next: Vec<Report> = guard
            .iter()
            .filter(|r| r.timestamp > cutoff)
            .cloned()
            .collect();
        let removed = before - next.len();

        if removed > 0 {
            log::info!("Retention cleanup removed {removed} of {before} reports");
            *guard = Arc::new(next);
        }

        removed
    }

    /// Returns reports matching the query, from the current snapshot.
    #[must_use]
    pub fn query(&self, query: &ReportQuery) -> Vec<Report> {
        self.snapshot()
            .iter()
            .filter(|r| {
                query.newer_than.is_none_or(|cutoff| r.timestamp > cutoff)
                    && query.severity_min.is_none_or(|min| r.severity >= min)
                    && query.hazard_type.is_none_or(|t| r.hazard_type == Some(t))
                    && (!query.verified_only || r.verified)
            })
            .cloned()
            .collect()
    }
}

/// Store for the active environmental hazard list.
///
/// The weather feed replaces the whole list every cycle; there is no
/// merge and no per-hazard update, so risk queries only ever see one
/// ingestion's snapshot.
#[derive(Debug, Default)]
pub struct HazardStore {
    inner: RwLock<Arc<Vec<EnvHazard>>>,
}

impl HazardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the latest ingestion's snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<EnvHazard>> {
        Arc::clone(&self.inner.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replaces the entire active-hazard list with this cycle's data.
    pub fn replace_all(&self, hazards: Vec<EnvHazard>) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        log::debug!(
            "Replacing {} active hazards with {}",
            guard.len(),
            hazards.len()
        );
        *guard = Arc::new(hazards);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use coastwatch_hazard_models::{EnvHazardKind, EnvSeverity};
    use coastwatch_report_models::{GeoPoint, NewReport};

    use super::*;
    use crate::build_report;

    fn stored(description: &str, severity: ReportSeverity, age_hours: i64) -> Report {
        let now = Utc::now();
        let new = NewReport {
            description: description.to_string(),
            severity,
            hazard_type: Some(HazardCategory::Flood),
            latitude: 19.0,
            longitude: 72.8,
            people_affected: None,
            timestamp: Some(now - Duration::hours(age_hours)),
        };
        build_report(new, now).unwrap()
    }

    #[test]
    fn snapshot_is_stable_across_writes() {
        let store = ReportStore::new();
        store.insert(stored("flood", ReportSeverity::Low, 1));

        let snapshot = store.snapshot();
        store.insert(stored("fire", ReportSeverity::High, 1));

        // The held snapshot still sees one report; a fresh one sees two.
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn set_verified_flips_only_the_target() {
        let store = ReportStore::new();
        let report = stored("flood", ReportSeverity::Low, 1);
        let id = report.id;
        store.insert(report);
        store.insert(stored("fire", ReportSeverity::High, 1));

        assert!(store.set_verified(id, true));
        assert!(!store.set_verified(Uuid::new_v4(), true));

        let verified: Vec<Report> = store.query(&ReportQuery {
            verified_only: true,
            ..ReportQuery::default()
        });
        assert_eq!(verified.len(), 1);
        assert_eq!(verified[0].id, id);
    }

    #[test]
    fn retention_drops_old_reports() {
        let store = ReportStore::new();
        store.insert(stored("flood", ReportSeverity::Low, 100));
        store.insert(stored("fire", ReportSeverity::Low, 1));

        let removed = store.retain_newer_than(Utc::now() - Duration::hours(48));
        assert_eq!(removed, 1);
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn query_filters_compose() {
        let store = ReportStore::new();
        store.insert(stored("flood", ReportSeverity::Low, 1));
        store.insert(stored("flood", ReportSeverity::Critical, 1));
        store.insert(stored("flood", ReportSeverity::Critical, 90));

        let results = store.query(&ReportQuery {
            newer_than: Some(Utc::now() - Duration::hours(24)),
            severity_min: Some(ReportSeverity::High),
            ..ReportQuery::default()
        });
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].severity, ReportSeverity::Critical);
    }

    #[test]
    fn hazard_list_is_replaced_wholesale() {
        let store = HazardStore::new();
        let hazard = |kind| EnvHazard {
            kind,
            severity: EnvSeverity::High,
            location: GeoPoint::new(19.0, 72.8),
            timestamp: Utc::now(),
        };

        store.replace_all(vec![hazard(EnvHazardKind::Storm)]);
        let old = store.snapshot();

        store.replace_all(vec![
            hazard(EnvHazardKind::Waves),
            hazard(EnvHazardKind::Wind),
        ]);

        // Old snapshot untouched; new one is this cycle's list only.
        assert_eq!(old.len(), 1);
        assert_eq!(old[0].kind, EnvHazardKind::Storm);
        let new = store.snapshot();
        assert_eq!(new.len(), 2);
        assert!(new.iter().all(|h| h.kind != EnvHazardKind::Storm));
    }
}
