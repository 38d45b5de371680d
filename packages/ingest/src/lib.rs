#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Report ingestion: validation, analysis attachment, snapshot stores,
//! and offline file loaders.
//!
//! Every report passes through [`build_report`] exactly once: the
//! description is analyzed, the result attached, and the report is
//! immutable from then on (apart from the moderation `verified` flag).
//! The analysis is never recomputed for a stored report.

pub mod files;
pub mod store;

use chrono::{DateTime, Utc};
use coastwatch_report_models::{NewReport, Report};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Submitted coordinates are outside the WGS84 domain or not finite.
    #[error("Invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        /// Submitted latitude.
        latitude: f64,
        /// Submitted longitude.
        longitude: f64,
    },

    /// A report/hazard/post file could not be read.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON file was not valid JSON at the top level.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A CSV file could not be opened or its header row parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Validates a submission and builds a stored [`Report`] from it.
///
/// Runs the keyword classifier over the description and attaches the
/// result, assigns a fresh ID, and defaults a missing observation
/// timestamp to `now`. This is the only place analysis is attached;
/// downstream consumers read `report.analysis` and never re-analyze.
///
/// # Errors
///
/// Returns [`IngestError::InvalidCoordinates`] when the submitted
/// coordinates are non-finite or outside latitude `[-90, 90]` /
/// longitude `[-180, 180]`.
pub fn build_report(new: NewReport, now: DateTime<Utc>) -> Result<Report, IngestError> {
    validate_coordinates(new.latitude, new.longitude)?;

    let analysis = coastwatch_nlp::analyze(&new.description);

    Ok(Report {
        id: Uuid::new_v4(),
        description: new.description,
        hazard_type: new.hazard_type,
        severity: new.severity,
        latitude: new.latitude,
        longitude: new.longitude,
        people_affected: new.people_affected,
        timestamp: new.timestamp.unwrap_or(now),
        verified: false,
        analysis,
    })
}

/// Checks that a coordinate pair is finite and inside the WGS84 domain.
fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), IngestError> {
    let valid = latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude);

    if valid {
        Ok(())
    } else {
        Err(IngestError::InvalidCoordinates {
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use coastwatch_hazard_models::{HazardCategory, ReportSeverity};

    use super::*;

    fn submission(description: &str, severity: ReportSeverity) -> NewReport {
        NewReport {
            description: description.to_string(),
            severity,
            hazard_type: None,
            latitude: 19.0,
            longitude: 72.8,
            people_affected: None,
            timestamp: None,
        }
    }

    #[test]
    fn attaches_analysis_at_creation() {
        let report = build_report(
            submission("flooding in the harbor area", ReportSeverity::Medium),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(report.analysis.hazard_type, Some(HazardCategory::Flood));
        assert!(!report.verified);
    }

    #[test]
    fn missing_timestamp_defaults_to_now() {
        let now = Utc::now();
        let report =
            build_report(submission("calm seas", ReportSeverity::Low), now).unwrap();
        assert_eq!(report.timestamp, now);
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let mut new = submission("flood", ReportSeverity::Low);
        new.latitude = 91.0;
        assert!(matches!(
            build_report(new, Utc::now()),
            Err(IngestError::InvalidCoordinates { .. })
        ));

        let mut new = submission("flood", ReportSeverity::Low);
        new.longitude = f64::NAN;
        assert!(matches!(
            build_report(new, Utc::now()),
            Err(IngestError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn empty_description_is_accepted_with_zero_signal() {
        let report =
            build_report(submission("", ReportSeverity::Low), Utc::now()).unwrap();
        assert_eq!(report.analysis.confidence, 0.0);
        assert_eq!(report.analysis.hazard_type, None);
    }

    #[test]
    fn critical_flood_report_fires_early_warning() {
        // Submission → analysis → alert policy, end to end.
        let new = NewReport {
            description: "urgent flood emergency near the coast".to_string(),
            severity: ReportSeverity::Critical,
            hazard_type: None,
            latitude: 19.0,
            longitude: 72.8,
            people_affected: None,
            timestamp: None,
        };
        let report = build_report(new, Utc::now()).unwrap();

        assert_eq!(report.analysis.hazard_type, Some(HazardCategory::Flood));
        assert!(report.analysis.urgency_level > 0.0);
        assert!(report.analysis.confidence > 0.0);
        // Critical severity alone is enough, whatever the urgency value.
        assert!(coastwatch_alert::should_trigger_early_warning(&report));
    }
}
