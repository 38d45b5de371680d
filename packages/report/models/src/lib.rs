#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Record types for hazard reports, text analysis results, environmental
//! hazards, and social posts.
//!
//! These are the shapes data takes as it moves between the ingestion
//! layer and the analysis crates. They are distinct from the taxonomy
//! enums in `coastwatch_hazard_models` and from the derived aggregates
//! (hotspots, risk assessments) owned by the crates that compute them.

use chrono::{DateTime, Utc};
use coastwatch_hazard_models::{
    EnvHazardKind, EnvSeverity, HazardCategory, ReportSeverity, Sentiment,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A geographic point in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new point from the given coordinates.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Result of running the keyword classifier over a piece of text.
///
/// A value object: recomputed fresh for every text analyzed, attached to
/// the report that produced it, and never mutated or cached afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    /// Detected hazard category, `None` when no hazard keyword matched.
    pub hazard_type: Option<HazardCategory>,
    /// Urgency signal in `[0, 1]` from urgency-keyword counting.
    pub urgency_level: f64,
    /// Sentiment label from word-frequency counting.
    pub sentiment: Sentiment,
    /// Strength of hazard-keyword evidence in `[0, 1]`.
    pub confidence: f64,
    /// Every hazard keyword found in the text, in table order.
    pub matched_keywords: Vec<String>,
}

impl TextAnalysis {
    /// The zero-signal result produced for empty or signal-free text.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            hazard_type: None,
            urgency_level: 0.0,
            sentiment: Sentiment::Neutral,
            confidence: 0.0,
            matched_keywords: Vec::new(),
        }
    }
}

/// A raw report submission, before validation and analysis.
///
/// This is the payload shape the ingestion endpoint accepts. Timestamps
/// are optional on submission and default to the ingestion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    /// Free-text description of the observed hazard.
    pub description: String,
    /// Reporter-supplied severity.
    pub severity: ReportSeverity,
    /// Reporter-supplied hazard category, unverified.
    pub hazard_type: Option<HazardCategory>,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Estimated number of people affected.
    pub people_affected: Option<u32>,
    /// When the hazard was observed; defaults to ingestion time.
    pub timestamp: Option<DateTime<Utc>>,
}

/// A stored hazard report with its attached text analysis.
///
/// Immutable after creation except for the `verified` flag, which the
/// moderation collaborator may flip. Removed only by retention cleanup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Unique report ID, assigned at ingestion.
    pub id: Uuid,
    /// Free-text description of the observed hazard.
    pub description: String,
    /// Reporter-supplied hazard category, unverified.
    pub hazard_type: Option<HazardCategory>,
    /// Reporter-supplied severity.
    pub severity: ReportSeverity,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Estimated number of people affected.
    pub people_affected: Option<u32>,
    /// When the hazard was observed.
    pub timestamp: DateTime<Utc>,
    /// Whether a moderator has verified this report.
    pub verified: bool,
    /// Classifier output for the description, computed at ingestion.
    pub analysis: TextAnalysis,
}

/// An environmental hazard from the weather/sensor feed.
///
/// The entire active-hazard list is replaced wholesale on every
/// ingestion cycle; individual hazards are never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvHazard {
    /// What kind of environmental hazard this is.
    pub kind: EnvHazardKind,
    /// Feed-graded severity.
    pub severity: EnvSeverity,
    /// Where the hazard is centered.
    pub location: GeoPoint,
    /// When the feed observed it.
    pub timestamp: DateTime<Utc>,
}

/// A raw social-media post from the social-feed collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    /// Source platform identifier (e.g. "twitter", "facebook").
    pub platform: String,
    /// Post text content.
    pub content: String,
    /// Engagement metric (likes + shares + replies as the feed counts them).
    pub engagement_count: u64,
    /// When the post was published.
    pub timestamp: DateTime<Utc>,
}
