#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Spatial aggregation of recent hazard reports into hotspots.
//!
//! Reports inside the active time window are bucketed into coarse grid
//! cells (0.1° × 0.1°, roughly 11 km at the equator) by truncating
//! scaled coordinates. This is an approximation of radius-based
//! clustering, not true clustering: two reports 100 m apart can land in
//! adjacent cells. Cells with at least two member reports become
//! hotspots carrying a severity rollup and impact totals.
//!
//! The aggregation is a full recompute over the snapshot it is given.
//! It never maintains incremental state, so a pass costs O(reports in
//! window) and calling it twice on the same input yields identical
//! output. Callers run it after report mutations and on a fixed timer;
//! a stale pass result can simply be discarded.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, Utc};
use coastwatch_hazard_models::{HazardCategory, HotspotSeverity};
use coastwatch_report_models::Report;
use serde::{Deserialize, Serialize};

/// Default aggregation window, in hours.
pub const DEFAULT_WINDOW_HOURS: i64 = 24;

/// Minimum member reports for a cell to become a hotspot.
const MIN_CELL_REPORTS: usize = 2;

/// Severity rollup score above which a hotspot is critical.
const CRITICAL_SCORE: u32 = 10;

/// Severity rollup score above which a hotspot is high.
const HIGH_SCORE: u32 = 6;

/// Coordinate scale factor: 0.1° cells.
const CELL_SCALE: f64 = 10.0;

/// A geographic cluster of at least two recent reports in one grid cell.
///
/// Every field is a pure function of the current member-report set.
/// Hotspots are recomputed wholesale each pass and never carried over
/// from a previous aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    /// Cell-key-derived identifier, stable across recomputes.
    pub id: String,
    /// Mean latitude of member reports.
    pub center_lat: f64,
    /// Mean longitude of member reports.
    pub center_lng: f64,
    /// Number of member reports.
    pub report_count: usize,
    /// Severity category from the weighted rollup score.
    pub severity: HotspotSeverity,
    /// Distinct hazard categories present among members, sorted.
    pub hazard_types: Vec<HazardCategory>,
    /// Most recent member report timestamp.
    pub last_update: DateTime<Utc>,
    /// Total people affected across members (missing counts as 0).
    pub affected_people: u64,
}

/// Grid cell key: truncated `(lat × 10, lng × 10)`.
type CellKey = (i64, i64);

/// Aggregates reports inside the window ending at `now` into hotspots.
///
/// Idempotent and total: malformed member data degrades (non-finite
/// coordinates skip the report, missing people counts add 0) rather
/// than failing the pass. Output is ordered by cell key, so repeated
/// calls over the same snapshot produce identical vectors.
#[must_use]
pub fn generate_hotspots(
    reports: &[Report],
    window: Duration,
    now: DateTime<Utc>,
) -> Vec<Hotspot> {
    let mut cells: BTreeMap<CellKey, Vec<&Report>> = BTreeMap::new();

    for report in reports {
        if now - report.timestamp >= window {
            continue;
        }
        let Some(key) = cell_key(report.latitude, report.longitude) else {
            log::warn!(
                "Skipping report {} with non-finite coordinates",
                report.id
            );
            continue;
        };
        cells.entry(key).or_default().push(report);
    }

    let hotspots: Vec<Hotspot> = cells
        .into_iter()
        .filter(|(_, members)| members.len() >= MIN_CELL_REPORTS)
        .map(|(key, members)| build_hotspot(key, &members))
        .collect();

    log::debug!(
        "Aggregated {} reports into {} hotspots",
        reports.len(),
        hotspots.len()
    );

    hotspots
}

/// Computes the grid cell for a coordinate pair, or `None` when either
/// coordinate is not a finite number.
#[allow(clippy::cast_possible_truncation)]
fn cell_key(latitude: f64, longitude: f64) -> Option<CellKey> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    Some((
        (latitude * CELL_SCALE).trunc() as i64,
        (longitude * CELL_SCALE).trunc() as i64,
    ))
}

/// Rolls one cell's members up into a [`Hotspot`].
fn build_hotspot(key: CellKey, members: &[&Report]) -> Hotspot {
    #[allow(clippy::cast_precision_loss)]
    let count = members.len() as f64;

    let center_lat = members.iter().map(|r| r.latitude).sum::<f64>() / count;
    let center_lng = members.iter().map(|r| r.longitude).sum::<f64>() / count;

    let score: u32 = members.iter().map(|r| r.severity.weight()).sum();

    let hazard_types: Vec<HazardCategory> = members
        .iter()
        .filter_map(|r| r.hazard_type)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let last_update = members
        .iter()
        .map(|r| r.timestamp)
        .max()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

    let affected_people = members
        .iter()
        .map(|r| u64::from(r.people_affected.unwrap_or(0)))
        .sum();

    Hotspot {
        id: format!("cell-{}:{}", key.0, key.1),
        center_lat,
        center_lng,
        report_count: members.len(),
        severity: severity_for_score(score),
        hazard_types,
        last_update,
        affected_people,
    }
}

/// Maps a severity rollup score to a hotspot category.
const fn severity_for_score(score: u32) -> HotspotSeverity {
    if score > CRITICAL_SCORE {
        HotspotSeverity::Critical
    } else if score > HIGH_SCORE {
        HotspotSeverity::High
    } else {
        HotspotSeverity::Medium
    }
}
