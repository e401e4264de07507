use serde::{Deserialize, Serialize};

use crate::seo::models::{Citation, CitationStatus, Keyword};

/// Points available to each part of the SEO score, plus the rank at which
/// the ranking part bottoms out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub citation: f64,
    pub ranking: f64,
    pub info: f64,
    pub rank_ceiling: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            citation: 30.0,
            ranking: 40.0,
            info: 30.0,
            rank_ceiling: 20.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub citation_score: f64,
    pub ranking_score: f64,
    pub info_score: f64,
    /// Sum of the parts, capped at 100 and rounded to one decimal.
    pub total: f64,
}

/// Mean keyword rank, or `None` when there are no keywords.
pub fn average_rank(keywords: &[Keyword]) -> Option<f64> {
    if keywords.is_empty() {
        return None;
    }
    let sum: u64 = keywords.iter().map(|k| u64::from(k.rank)).sum();
    Some(sum as f64 / keywords.len() as f64)
}

/// Citations that are verified, claimed or active.
pub fn active_citation_count(citations: &[Citation]) -> usize {
    citations.iter().filter(|c| c.status.is_live()).count()
}

/// Share of verified citations scaled to the citation weight. 0 for an empty list.
pub fn citation_score(citations: &[Citation], weights: &ScoreWeights) -> f64 {
    if citations.is_empty() {
        return 0.0;
    }
    let verified = citations
        .iter()
        .filter(|c| c.status == CitationStatus::Verified)
        .count();
    verified as f64 / citations.len() as f64 * weights.citation
}

/// Linear in the average rank: full weight at rank 0, nothing at or past the ceiling.
/// 0 for an empty list.
pub fn ranking_score(keywords: &[Keyword], weights: &ScoreWeights) -> f64 {
    match average_rank(keywords) {
        Some(avg) => {
            ((weights.rank_ceiling - avg) / weights.rank_ceiling * weights.ranking).max(0.0)
        }
        None => 0.0,
    }
}

pub fn compute_breakdown(
    citations: &[Citation],
    keywords: &[Keyword],
    weights: &ScoreWeights,
) -> ScoreBreakdown {
    let citation_score = citation_score(citations, weights);
    let ranking_score = ranking_score(keywords, weights);
    // Profile completeness is not checked yet; it always earns full marks.
    let info_score = weights.info;

    let total = round_one_decimal((citation_score + ranking_score + info_score).min(100.0));

    ScoreBreakdown {
        citation_score,
        ranking_score,
        info_score,
        total,
    }
}

pub fn compute_seo_score_with(
    citations: &[Citation],
    keywords: &[Keyword],
    weights: &ScoreWeights,
) -> f64 {
    compute_breakdown(citations, keywords, weights).total
}

/// SEO score in [0, 100] with the default weights.
pub fn compute_seo_score(citations: &[Citation], keywords: &[Keyword]) -> f64 {
    compute_seo_score_with(citations, keywords, &ScoreWeights::default())
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
