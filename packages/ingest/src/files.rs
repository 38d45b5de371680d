//! Offline file loaders for report, hazard, and post collections.
//!
//! These are the transport stand-ins for the external collaborators:
//! whatever actually delivers submissions in production, these loaders
//! accept the same shapes from JSON and CSV files. A single malformed
//! record is skipped with a warning rather than aborting the whole
//! file, matching the degrade-don't-fail posture of the analysis
//! pipeline.

use std::path::Path;

use coastwatch_report_models::{EnvHazard, NewReport, SocialPost};
use serde::de::DeserializeOwned;

use crate::IngestError;

/// Loads report submissions from a JSON array file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array.
/// Individual malformed records are skipped with a warning.
pub fn load_reports_json(path: &Path) -> Result<Vec<NewReport>, IngestError> {
    load_json_records(path, "report")
}

/// Loads environmental hazards from a JSON array file.
///
/// Records with hazard kinds outside the known taxonomy fail to parse
/// and are skipped here — the ingestion boundary surfaces what a risk
/// pass would otherwise silently ignore.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array.
pub fn load_hazards_json(path: &Path) -> Result<Vec<EnvHazard>, IngestError> {
    load_json_records(path, "hazard")
}

/// Loads social posts from a JSON array file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array.
pub fn load_posts_json(path: &Path) -> Result<Vec<SocialPost>, IngestError> {
    load_json_records(path, "post")
}

/// Loads report submissions from a CSV file with a header row.
///
/// Column names follow the JSON field names (`description`, `severity`,
/// `hazardType`, `latitude`, `longitude`, `peopleAffected`,
/// `timestamp`). Rows that fail to parse are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its header row is
/// unreadable.
pub fn load_reports_csv(path: &Path) -> Result<Vec<NewReport>, IngestError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for (index, row) in reader.deserialize::<NewReport>().enumerate() {
        match row {
            Ok(record) => records.push(record),
            Err(err) => {
                log::warn!("Skipping malformed report row {}: {err}", index + 1);
            }
        }
    }

    log::info!("Loaded {} reports from {}", records.len(), path.display());
    Ok(records)
}

/// Shared JSON loader: reads an array, parses records one by one, and
/// skips the ones that do not match the expected shape.
fn load_json_records<T: DeserializeOwned>(
    path: &Path,
    kind: &str,
) -> Result<Vec<T>, IngestError> {
    let raw = std::fs::read_to_string(path)?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&raw)?;

    let total = values.len();
    let mut records = Vec::with_capacity(total);

    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(err) => {
                log::warn!("Skipping malformed {kind} record {index}: {err}");
            }
        }
    }

    log::info!(
        "Loaded {} of {total} {kind} records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use coastwatch_hazard_models::{EnvHazardKind, ReportSeverity};

    use super::*;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("coastwatch-test-{name}"));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_reports_and_skips_malformed_records() {
        let path = temp_file(
            "reports.json",
            r#"[
                {
                    "description": "flooding near the dock",
                    "severity": "HIGH",
                    "hazardType": "FLOOD",
                    "latitude": 19.0,
                    "longitude": 72.8,
                    "peopleAffected": 5,
                    "timestamp": "2025-06-01T10:00:00Z"
                },
                { "description": "missing fields" }
            ]"#,
        );

        let reports = load_reports_json(&path).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].severity, ReportSeverity::High);
    }

    #[test]
    fn unknown_hazard_kind_is_skipped_not_fatal() {
        let path = temp_file(
            "hazards.json",
            r#"[
                {
                    "kind": "STORM",
                    "severity": "HIGH",
                    "location": { "latitude": 19.0, "longitude": 72.8 },
                    "timestamp": "2025-06-01T10:00:00Z"
                },
                {
                    "kind": "METEOR",
                    "severity": "HIGH",
                    "location": { "latitude": 19.0, "longitude": 72.8 },
                    "timestamp": "2025-06-01T10:00:00Z"
                }
            ]"#,
        );

        let hazards = load_hazards_json(&path).unwrap();
        assert_eq!(hazards.len(), 1);
        assert_eq!(hazards[0].kind, EnvHazardKind::Storm);
    }

    #[test]
    fn loads_reports_from_csv() {
        let path = temp_file(
            "reports.csv",
            "description,severity,hazardType,latitude,longitude,peopleAffected,timestamp\n\
             flooded underpass,MEDIUM,FLOOD,19.01,72.81,,\n\
             not-a-report,NOT_A_SEVERITY,,x,y,,\n",
        );

        let reports = load_reports_csv(&path).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].description, "flooded underpass");
        assert_eq!(reports[0].people_affected, None);
        assert_eq!(reports[0].timestamp, None);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result =
            load_reports_json(Path::new("/nonexistent/coastwatch-reports.json"));
        assert!(matches!(result, Err(IngestError::Io(_))));
    }
}
