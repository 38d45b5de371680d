#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Proximity-weighted risk scoring over active environmental hazards.
//!
//! Given a query location and the latest hazard snapshot from the
//! weather/sensor feed, computes a `[0, 1]` risk estimate with a
//! per-factor breakdown and tiered advisory text. Each hazard
//! contributes its severity weight scaled by a linear proximity decay:
//! full weight at the query location, zero at 100 km and beyond.
//!
//! The computation is pure and total. It only ever sees one wholesale
//! snapshot of the hazard list, so concurrent feed updates cannot tear a
//! single assessment.

use coastwatch_hazard_models::{EnvHazardKind, EnvSeverity, RiskLevel};
use coastwatch_report_models::{EnvHazard, GeoPoint};
use serde::{Deserialize, Serialize};

/// Mean Earth radius, in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance at which a hazard's contribution decays to zero.
const MAX_EFFECT_DISTANCE_KM: f64 = 100.0;

/// Overall risk above which the level is high.
const HIGH_RISK: f64 = 0.7;

/// Overall risk above which the level is medium.
const MEDIUM_RISK: f64 = 0.4;

/// Default assessment timeframe, in hours.
pub const DEFAULT_TIMEFRAME_HOURS: u32 = 24;

/// Per-hazard severity weights. High-severity storms and waves weigh
/// more; wind and visibility contribute a flat weight regardless of
/// severity.
const STORM_WEIGHT_HIGH: f64 = 0.8;
const STORM_WEIGHT: f64 = 0.5;
const WAVES_WEIGHT_HIGH: f64 = 0.7;
const WAVES_WEIGHT: f64 = 0.4;
const WIND_WEIGHT: f64 = 0.3;
const VISIBILITY_WEIGHT: f64 = 0.2;

/// Advisory strings for each risk band, selected wholesale by level
/// rather than composed per factor.
const HIGH_RISK_ADVICE: &[&str] = &[
    "Avoid all coastal and open-water activity",
    "Follow evacuation guidance from local authorities",
    "Keep emergency contacts and supplies within reach",
];
const MEDIUM_RISK_ADVICE: &[&str] = &[
    "Exercise caution near the shoreline",
    "Monitor official weather advisories",
    "Postpone non-essential trips on the water",
];
const LOW_RISK_ADVICE: &[&str] = &[
    "Conditions are currently favorable",
    "Check back before heading out for extended periods",
];

/// Accumulated risk weight per environmental factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    /// Accumulated storm contribution.
    pub storm: f64,
    /// Accumulated wave contribution.
    pub waves: f64,
    /// Accumulated wind contribution.
    pub wind: f64,
    /// Accumulated visibility contribution.
    pub visibility: f64,
}

impl RiskFactors {
    /// Sum of all factor contributions, before the overall clamp.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.storm + self.waves + self.wind + self.visibility
    }
}

/// Result of one risk query. Computed fresh per query, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Overall risk in `[0, 1]`.
    pub overall_risk: f64,
    /// Risk band derived from the overall score.
    pub risk_level: RiskLevel,
    /// Per-factor accumulated weights.
    pub factors: RiskFactors,
    /// Advisory strings for the risk band, in display order.
    pub recommendations: Vec<String>,
}

/// Assesses risk at `location` from the active hazard snapshot.
///
/// An empty hazard list is a valid low-risk answer, not an error.
/// Hazards with non-finite coordinates are skipped rather than failing
/// the assessment. `timeframe_hours` is accepted for interface
/// compatibility but does not alter scoring in this version.
#[must_use]
pub fn assess_risk(
    location: GeoPoint,
    active_hazards: &[EnvHazard],
    timeframe_hours: u32,
) -> RiskAssessment {
    log::trace!(
        "Assessing risk at ({}, {}) over {timeframe_hours}h against {} hazards",
        location.latitude,
        location.longitude,
        active_hazards.len()
    );

    let mut factors = RiskFactors::default();

    for hazard in active_hazards {
        if !hazard.location.latitude.is_finite()
            || !hazard.location.longitude.is_finite()
        {
            log::warn!("Skipping {} hazard with non-finite coordinates", hazard.kind);
            continue;
        }

        let distance = haversine_km(location, hazard.location);
        let proximity = (1.0 - distance / MAX_EFFECT_DISTANCE_KM).max(0.0);

        let high = hazard.severity == EnvSeverity::High;
        match hazard.kind {
            EnvHazardKind::Storm => {
                factors.storm +=
                    proximity * if high { STORM_WEIGHT_HIGH } else { STORM_WEIGHT };
            }
            EnvHazardKind::Waves => {
                factors.waves +=
                    proximity * if high { WAVES_WEIGHT_HIGH } else { WAVES_WEIGHT };
            }
            EnvHazardKind::Wind => factors.wind += proximity * WIND_WEIGHT,
            EnvHazardKind::Visibility => {
                factors.visibility += proximity * VISIBILITY_WEIGHT;
            }
        }
    }

    let overall_risk = factors.total().min(1.0);
    let risk_level = level_for(overall_risk);

    RiskAssessment {
        overall_risk,
        risk_level,
        factors,
        recommendations: recommendations_for(risk_level),
    }
}

/// Maps an overall risk score to its band.
fn level_for(overall: f64) -> RiskLevel {
    if overall > HIGH_RISK {
        RiskLevel::High
    } else if overall > MEDIUM_RISK {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Returns the advisory list for a risk band.
fn recommendations_for(level: RiskLevel) -> Vec<String> {
    let advice = match level {
        RiskLevel::High => HIGH_RISK_ADVICE,
        RiskLevel::Medium => MEDIUM_RISK_ADVICE,
        RiskLevel::Low => LOW_RISK_ADVICE,
    };
    advice.iter().map(ToString::to_string).collect()
}

/// Great-circle distance between two points, in kilometers.
///
/// Standard haversine over a spherical Earth of radius
/// [`EARTH_RADIUS_KM`]; accurate to ~0.5% which is far inside the
/// tolerance of the 100 km linear decay applied on top of it.
#[must_use]
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    fn hazard(
        kind: EnvHazardKind,
        severity: EnvSeverity,
        lat: f64,
        lng: f64,
    ) -> EnvHazard {
        EnvHazard {
            kind,
            severity,
            location: GeoPoint::new(lat, lng),
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn haversine_zero_distance() {
        let origin = GeoPoint::new(0.0, 0.0);
        assert_eq!(haversine_km(origin, origin), 0.0);
    }

    #[test]
    fn haversine_quarter_great_circle() {
        let distance =
            haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 90.0));
        assert!((distance - 10_007.5).abs() < 0.1);
    }

    #[test]
    fn empty_hazard_list_is_low_risk() {
        let assessment =
            assess_risk(GeoPoint::new(19.0, 72.8), &[], DEFAULT_TIMEFRAME_HOURS);
        assert_eq!(assessment.overall_risk, 0.0);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert!(!assessment.recommendations.is_empty());
    }

    #[test]
    fn colocated_high_storm_contributes_exactly_its_weight() {
        let hazards =
            vec![hazard(EnvHazardKind::Storm, EnvSeverity::High, 19.0, 72.8)];
        let assessment =
            assess_risk(GeoPoint::new(19.0, 72.8), &hazards, DEFAULT_TIMEFRAME_HOURS);
        assert!((assessment.factors.storm - 0.8).abs() < 1e-12);
        assert_eq!(assessment.risk_level, RiskLevel::High);
    }

    #[test]
    fn medium_storm_weighs_less() {
        let hazards =
            vec![hazard(EnvHazardKind::Storm, EnvSeverity::Medium, 19.0, 72.8)];
        let assessment =
            assess_risk(GeoPoint::new(19.0, 72.8), &hazards, DEFAULT_TIMEFRAME_HOURS);
        assert!((assessment.factors.storm - 0.5).abs() < 1e-12);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn hazard_beyond_decay_radius_contributes_nothing() {
        // ~111 km north of the query point.
        let hazards =
            vec![hazard(EnvHazardKind::Storm, EnvSeverity::High, 20.0, 72.8)];
        let assessment =
            assess_risk(GeoPoint::new(19.0, 72.8), &hazards, DEFAULT_TIMEFRAME_HOURS);
        assert_eq!(assessment.overall_risk, 0.0);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
    }

    #[test]
    fn wind_and_visibility_ignore_severity() {
        let query = GeoPoint::new(0.0, 0.0);
        for severity in [EnvSeverity::Medium, EnvSeverity::High] {
            let wind = assess_risk(
                query,
                &[hazard(EnvHazardKind::Wind, severity, 0.0, 0.0)],
                DEFAULT_TIMEFRAME_HOURS,
            );
            assert!((wind.factors.wind - 0.3).abs() < 1e-12);

            let visibility = assess_risk(
                query,
                &[hazard(EnvHazardKind::Visibility, severity, 0.0, 0.0)],
                DEFAULT_TIMEFRAME_HOURS,
            );
            assert!((visibility.factors.visibility - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn overall_risk_clamps_at_one() {
        let hazards = vec![
            hazard(EnvHazardKind::Storm, EnvSeverity::High, 0.0, 0.0),
            hazard(EnvHazardKind::Waves, EnvSeverity::High, 0.0, 0.0),
            hazard(EnvHazardKind::Storm, EnvSeverity::High, 0.0, 0.0),
        ];
        let assessment =
            assess_risk(GeoPoint::new(0.0, 0.0), &hazards, DEFAULT_TIMEFRAME_HOURS);
        assert_eq!(assessment.overall_risk, 1.0);
        // The per-factor breakdown keeps the unclamped accumulation.
        assert!(assessment.factors.total() > 1.0);
    }

    #[test]
    fn proximity_decays_linearly() {
        // A high storm at ~50 km should contribute roughly half weight.
        let distance_deg = 50.0 / 111.194_926_644_558_74;
        let hazards = vec![hazard(
            EnvHazardKind::Storm,
            EnvSeverity::High,
            distance_deg,
            0.0,
        )];
        let assessment =
            assess_risk(GeoPoint::new(0.0, 0.0), &hazards, DEFAULT_TIMEFRAME_HOURS);
        assert!((assessment.factors.storm - 0.4).abs() < 1e-3);
    }

    #[test]
    fn timeframe_does_not_alter_scoring() {
        let hazards =
            vec![hazard(EnvHazardKind::Waves, EnvSeverity::High, 19.0, 72.8)];
        let query = GeoPoint::new(19.0, 72.8);
        let day = assess_risk(query, &hazards, DEFAULT_TIMEFRAME_HOURS);
        let week = assess_risk(query, &hazards, 168);
        assert_eq!(day, week);
    }

    #[test]
    fn recommendations_track_risk_band() {
        let high = assess_risk(
            GeoPoint::new(0.0, 0.0),
            &[hazard(EnvHazardKind::Storm, EnvSeverity::High, 0.0, 0.0)],
            DEFAULT_TIMEFRAME_HOURS,
        );
        assert_eq!(high.recommendations.len(), HIGH_RISK_ADVICE.len());
        assert!(high.recommendations[0].contains("Avoid"));

        let low = assess_risk(GeoPoint::new(0.0, 0.0), &[], DEFAULT_TIMEFRAME_HOURS);
        assert_eq!(low.recommendations.len(), LOW_RISK_ADVICE.len());
    }
}
