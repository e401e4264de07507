use crate::seo::models::{
    Citation, CitationStatus, Keyword, Priority, Recommendation, RecommendationType,
};

/// Keywords ranked below this position are considered underperforming.
const UNDERPERFORMING_RANK: u32 = 10;

/// Builds advisory items in a fixed order: pending citations, weak keywords,
/// then the review reminder which is always present.
pub fn generate_recommendations(
    citations: &[Citation],
    keywords: &[Keyword],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let pending = citations
        .iter()
        .filter(|c| c.status == CitationStatus::Pending)
        .count();
    if pending > 0 {
        recommendations.push(Recommendation {
            kind: RecommendationType::Citations,
            priority: Priority::High,
            action: format!("Complete verification for {pending} pending citations"),
            impact: "Improve local search visibility".to_string(),
        });
    }

    let underperforming = keywords
        .iter()
        .filter(|k| k.rank > UNDERPERFORMING_RANK)
        .count();
    if underperforming > 0 {
        recommendations.push(Recommendation {
            kind: RecommendationType::Keywords,
            priority: Priority::Medium,
            action: format!("Optimize content for {underperforming} underperforming keywords"),
            impact: "Increase organic traffic".to_string(),
        });
    }

    recommendations.push(Recommendation {
        kind: RecommendationType::Reviews,
        priority: Priority::High,
        action: "Implement review generation strategy".to_string(),
        impact: "Boost local rankings and trust".to_string(),
    });

    recommendations
}
