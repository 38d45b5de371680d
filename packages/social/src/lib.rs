#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Relevance scoring for social-media posts.
//!
//! Combines the keyword classifier's output with an engagement metric
//! into a single relevance score, and batch-filters posts whose hazard
//! signal is too weak to be worth storing. The batch gate is a
//! precision gate on classifier confidence, not a relevance gate:
//! a retained post can still have a low relevance score.

use coastwatch_report_models::{SocialPost, TextAnalysis};
use serde::{Deserialize, Serialize};

/// Posts at or below this classifier confidence are discarded by
/// [`process_many`] as too weak to be hazard-related.
const CONFIDENCE_GATE: f64 = 0.3;

/// Engagement count at which the engagement multiplier doubles.
const ENGAGEMENT_SCALE: f64 = 100.0;

/// Baseline urgency multiplier so zero-urgency posts still score.
const URGENCY_FLOOR: f64 = 0.5;

/// A post that passed the confidence gate, with its analysis and score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPost {
    /// The original post.
    pub post: SocialPost,
    /// Classifier output for the post content.
    pub analysis: TextAnalysis,
    /// Composite relevance score.
    pub relevance: f64,
}

/// Scores a single post's relevance.
///
/// `confidence × (1 + engagement / 100) × (urgency + 0.5)` — confident
/// hazard mentions score higher, engagement amplifies linearly, and
/// urgent posts get up to a 3× edge over calm ones.
#[must_use]
pub fn score(post: &SocialPost) -> f64 {
    relevance(&coastwatch_nlp::analyze(&post.content), post.engagement_count)
}

/// Analyzes and scores a batch of posts, keeping only those whose
/// classifier confidence clears the precision gate.
///
/// Input order is preserved for retained posts.
#[must_use]
pub fn process_many(posts: Vec<SocialPost>) -> Vec<ScoredPost> {
    let total = posts.len();

    let scored: Vec<ScoredPost> = posts
        .into_iter()
        .filter_map(|post| {
            let analysis = coastwatch_nlp::analyze(&post.content);
            if analysis.confidence <= CONFIDENCE_GATE {
                return None;
            }
            let relevance = relevance(&analysis, post.engagement_count);
            Some(ScoredPost {
                post,
                analysis,
                relevance,
            })
        })
        .collect();

    log::debug!(
        "Retained {} of {} posts above the confidence gate",
        scored.len(),
        total
    );

    scored
}

/// The relevance formula over an already-computed analysis.
fn relevance(analysis: &TextAnalysis, engagement_count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let engagement = engagement_count as f64;

    analysis.confidence
        * (1.0 + engagement / ENGAGEMENT_SCALE)
        * (analysis.urgency_level + URGENCY_FLOOR)
}
