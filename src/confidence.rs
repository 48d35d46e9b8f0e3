//! Confidence scoring
//!
//! Share of pattern-set fields for which at least one selector in the chain
//! matched something, as a rounded percentage.

use scraper::Html;

use crate::extractors::has_match;
use crate::patterns::{Field, SitePatternSet};

/// Fixed score of results from the regex-only fallback path
pub const FALLBACK_CONFIDENCE: u8 = 20;

pub fn score_confidence(document: &Html, patterns: &SitePatternSet) -> u8 {
    let total = patterns.field_count();

    let matched = Field::ALL
        .iter()
        .filter(|field| {
            patterns
                .chain(**field)
                .iter()
                .any(|selector| has_match(document, selector))
        })
        .count();

    let score = (100.0 * matched as f64 / total as f64).round();
    tracing::debug!(patterns = patterns.key, matched, total, score, "scored confidence");
    score.clamp(0.0, 100.0) as u8
}
