#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Hazard taxonomy types and severity definitions.
//!
//! This crate defines the canonical hazard taxonomy used across the
//! entire coastwatch system: the categories the text classifier can
//! assign, report and environmental severity scales, sentiment labels,
//! and the derived hotspot/risk levels.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Hazard categories assignable by the keyword classifier.
///
/// Declaration order is significant: the classifier evaluates categories
/// in this order and the first category with any keyword match wins, so
/// reordering variants changes classification results for texts that
/// mention multiple hazards.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HazardCategory {
    /// Inundation from rainfall, rivers, or coastal surge
    Flood,
    /// Cyclones, heavy winds, and severe weather
    Storm,
    /// Structural or wildland fires
    Fire,
    /// Seismic events and their immediate damage
    Earthquake,
    /// Tsunami waves and related coastal surges
    Tsunami,
    /// Transport or industrial accidents
    Accident,
}

impl HazardCategory {
    /// Returns all variants in classifier evaluation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Flood,
            Self::Storm,
            Self::Fire,
            Self::Earthquake,
            Self::Tsunami,
            Self::Accident,
        ]
    }
}

/// Severity level of a submitted hazard report, from low to critical.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportSeverity {
    /// Minor disruption, no immediate danger
    Low,
    /// Localized danger, situation worth monitoring
    Medium,
    /// Significant danger to people or property
    High,
    /// Life-threatening, demands immediate response
    Critical,
}

impl ReportSeverity {
    /// Returns the hotspot aggregation weight for this severity.
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }
}

/// Sentiment label derived from word-frequency counting.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    /// More positive than negative words
    Positive,
    /// More negative than positive words
    Negative,
    /// Balanced or no sentiment words at all
    Neutral,
}

/// Severity category of an aggregated hotspot.
///
/// Hotspots never classify below medium: a cell only becomes a hotspot
/// with at least two member reports, which already clears the lowest
/// rollup scores.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HotspotSeverity {
    /// Rollup score of 6 or below
    Medium,
    /// Rollup score above 6
    High,
    /// Rollup score above 10
    Critical,
}

/// Kind of environmental hazard supplied by the weather/sensor feed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvHazardKind {
    /// Active storm system
    Storm,
    /// Dangerous wave conditions
    Waves,
    /// Reduced visibility (fog, haze, heavy rain)
    Visibility,
    /// Strong sustained winds
    Wind,
}

impl EnvHazardKind {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Storm, Self::Waves, Self::Visibility, Self::Wind]
    }
}

/// Severity of an environmental hazard as graded by the weather feed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvSeverity {
    /// Notable but not extreme conditions
    Medium,
    /// Extreme conditions
    High,
}

/// Overall risk band for a risk assessment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Overall risk of 0.4 or below
    Low,
    /// Overall risk above 0.4
    Medium,
    /// Overall risk above 0.7
    High,
}
