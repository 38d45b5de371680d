#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Rule-based keyword classifier for hazard report text.
//!
//! Extracts hazard type, urgency, sentiment, and a confidence score from
//! free text using fixed keyword tables. This is deliberately a
//! deterministic, explainable classifier rather than a statistical
//! model: every score can be traced back to the keywords that produced
//! it, and identical input always yields identical output.

use coastwatch_hazard_models::{HazardCategory, Sentiment};
use coastwatch_report_models::TextAnalysis;

/// Confidence contribution of each matched hazard keyword.
const CONFIDENCE_PER_KEYWORD: f64 = 0.2;

/// Urgency contribution of each matched urgency keyword.
const URGENCY_PER_KEYWORD: f64 = 0.3;

/// Keyword table for each hazard category.
///
/// Categories are evaluated in [`HazardCategory`] declaration order and
/// the FIRST category with at least one matching keyword determines the
/// hazard type, even when a later category matches more keywords. That
/// tie-break is load-bearing: texts mentioning several hazards must keep
/// classifying the way they always have.
const HAZARD_KEYWORDS: &[(HazardCategory, &[&str])] = &[
    (
        HazardCategory::Flood,
        &[
            "flood",
            "flooding",
            "inundation",
            "waterlogged",
            "submerged",
            "water rising",
            "overflow",
        ],
    ),
    (
        HazardCategory::Storm,
        &[
            "storm",
            "cyclone",
            "hurricane",
            "typhoon",
            "thunderstorm",
            "heavy rain",
            "gale",
        ],
    ),
    (
        HazardCategory::Fire,
        &["fire", "smoke", "burning", "blaze", "flames"],
    ),
    (
        HazardCategory::Earthquake,
        &["earthquake", "tremor", "quake", "seismic", "aftershock"],
    ),
    (
        HazardCategory::Tsunami,
        &["tsunami", "tidal wave", "sea surge", "giant wave"],
    ),
    (
        HazardCategory::Accident,
        &["accident", "crash", "collision", "capsized", "derail"],
    ),
];

/// Keywords indicating urgency. Each match adds [`URGENCY_PER_KEYWORD`]
/// to the urgency level, capped at 1.
const URGENCY_KEYWORDS: &[&str] = &[
    "urgent",
    "emergency",
    "immediately",
    "help",
    "sos",
    "trapped",
    "evacuate",
    "rescue",
    "danger",
    "critical",
];

/// Words counted (by whole-word frequency) toward negative sentiment.
const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "dangerous",
    "scary",
    "disaster",
    "damage",
    "destroyed",
    "dead",
    "injured",
    "missing",
];

/// Words counted (by whole-word frequency) toward positive sentiment.
const POSITIVE_WORDS: &[&str] = &[
    "safe", "good", "fine", "okay", "calm", "clear", "normal", "recovered",
    "rescued", "stable",
];

/// Analyzes a piece of free text and extracts hazard signals.
///
/// Pure and total: never fails, never performs I/O, and empty text
/// degrades to the zero-signal [`TextAnalysis::none()`] result. Both
/// confidence and urgency are clamped to `[0, 1]` regardless of how many
/// keywords the text repeats.
#[must_use]
pub fn analyze(text: &str) -> TextAnalysis {
    if text.is_empty() {
        return TextAnalysis::none();
    }

    let lower = text.to_lowercase();

    // ── Hazard type and confidence ──────────────────────────────────
    let mut hazard_type = None;
    let mut confidence = 0.0;
    let mut matched_keywords = Vec::new();

    for (category, keywords) in HAZARD_KEYWORDS {
        let matches: Vec<&str> = keywords
            .iter()
            .copied()
            .filter(|keyword| lower.contains(keyword))
            .collect();

        if matches.is_empty() {
            continue;
        }

        // First category with any match wins the type; every category's
        // matches still feed confidence and the keyword list.
        if hazard_type.is_none() {
            hazard_type = Some(*category);
        }

        #[allow(clippy::cast_precision_loss)]
        {
            confidence += matches.len() as f64 * CONFIDENCE_PER_KEYWORD;
        }
        matched_keywords.extend(matches.iter().map(ToString::to_string));
    }

    // ── Urgency ─────────────────────────────────────────────────────
    let urgency_matches = URGENCY_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .count();

    #[allow(clippy::cast_precision_loss)]
    let urgency_level = (urgency_matches as f64 * URGENCY_PER_KEYWORD).min(1.0);

    TextAnalysis {
        hazard_type,
        urgency_level,
        sentiment: score_sentiment(&lower),
        confidence: confidence.clamp(0.0, 1.0),
        matched_keywords,
    }
}

/// Scores sentiment by whole-word frequency counting.
///
/// Unlike hazard matching (substring containment), sentiment compares
/// word tokens exactly, so "dangerous" does not count as "danger" here.
/// Repeated words count once per occurrence.
fn score_sentiment(lower: &str) -> Sentiment {
    let mut negative = 0_usize;
    let mut positive = 0_usize;

    for word in lower.split(|c: char| !c.is_alphanumeric()) {
        if word.is_empty() {
            continue;
        }
        if NEGATIVE_WORDS.contains(&word) {
            negative += 1;
        }
        if POSITIVE_WORDS.contains(&word) {
            positive += 1;
        }
    }

    if negative > positive {
        Sentiment::Negative
    } else if positive > negative {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}
