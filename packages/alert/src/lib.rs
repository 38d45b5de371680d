#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Early-warning trigger policy and the dispatch seam for the external
//! notification channel.
//!
//! The policy itself is a pure predicate over a single report. Dispatch
//! is fire-and-forget with exactly one attempt: a failed dispatch is
//! reported to the caller so it can be surfaced, but report persistence
//! is external and independent, so nothing is blocked or rolled back.

use chrono::{DateTime, Utc};
use coastwatch_hazard_models::{HazardCategory, ReportSeverity};
use coastwatch_report_models::Report;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Urgency level above which a report triggers an early warning even
/// when its severity is below critical.
const URGENCY_TRIGGER: f64 = 0.7;

/// Errors that can occur while dispatching a warning.
#[derive(Debug, Error)]
pub enum AlertError {
    /// The notification channel rejected or could not accept the warning.
    #[error("Warning dispatch failed: {reason}")]
    Dispatch {
        /// Channel-provided failure description.
        reason: String,
    },
}

/// A warning handed to the notification channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningRecord {
    /// Severity of the originating report.
    pub severity: ReportSeverity,
    /// Hazard category, preferring the classifier's verdict over the
    /// reporter-supplied one.
    pub hazard_type: Option<HazardCategory>,
    /// Latitude of the originating report.
    pub latitude: f64,
    /// Longitude of the originating report.
    pub longitude: f64,
    /// Human-readable warning text.
    pub message: String,
    /// ID of the report that triggered the warning.
    pub source_report_id: Uuid,
    /// When the warning was constructed.
    pub timestamp: DateTime<Utc>,
}

/// Delivery seam for the external notification channel (SMS, push,
/// plain logging). Implementations decide the transport; the policy
/// only ever makes a single delivery attempt per warning.
pub trait WarningDispatcher {
    /// Attempts to deliver one warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel is unreachable or rejects the
    /// warning. Callers must not retry on behalf of the channel.
    fn dispatch(&self, warning: &WarningRecord) -> Result<(), AlertError>;
}

/// A [`WarningDispatcher`] that writes warnings to the log.
///
/// The default channel for CLI use and tests.
pub struct LogDispatcher;

impl WarningDispatcher for LogDispatcher {
    fn dispatch(&self, warning: &WarningRecord) -> Result<(), AlertError> {
        log::info!(
            "EARLY WARNING [{}] {} (report {})",
            warning.severity,
            warning.message,
            warning.source_report_id
        );
        Ok(())
    }
}

/// Whether a report warrants an early warning.
///
/// True iff the report is critical severity or its analyzed urgency
/// exceeds [`URGENCY_TRIGGER`].
#[must_use]
pub fn should_trigger_early_warning(report: &Report) -> bool {
    report.severity == ReportSeverity::Critical
        || report.analysis.urgency_level > URGENCY_TRIGGER
}

/// Evaluates one report against the trigger policy and, when it fires,
/// builds and dispatches a warning.
///
/// Returns the dispatched warning, or `None` when the policy did not
/// fire. Exactly one delivery attempt is made; there is no retry and no
/// acknowledgment.
///
/// # Errors
///
/// Returns an error if the dispatch attempt fails. The warning is lost
/// in that case; the originating report is unaffected.
pub fn evaluate(
    report: &Report,
    dispatcher: &dyn WarningDispatcher,
    now: DateTime<Utc>,
) -> Result<Option<WarningRecord>, AlertError> {
    if !should_trigger_early_warning(report) {
        return Ok(None);
    }

    let warning = build_warning(report, now);
    dispatcher.dispatch(&warning)?;

    Ok(Some(warning))
}

/// Builds the warning record for a triggering report.
fn build_warning(report: &Report, now: DateTime<Utc>) -> WarningRecord {
    let hazard_type = report.analysis.hazard_type.or(report.hazard_type);

    let message = hazard_type.map_or_else(
        || format!("{} severity hazard reported", report.severity),
        |category| format!("{} severity {category} hazard reported", report.severity),
    );

    WarningRecord {
        severity: report.severity,
        hazard_type,
        latitude: report.latitude,
        longitude: report.longitude,
        message,
        source_report_id: report.id,
        timestamp: now,
    }
}
