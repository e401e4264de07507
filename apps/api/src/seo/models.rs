use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Day of the week. Declaration order is week order, so a `BTreeMap<Day, _>`
/// serializes Monday first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub category: String,
    /// Opening hours per day, e.g. `"9:00 AM - 9:00 PM"`.
    pub hours: BTreeMap<Day, String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CitationStatus {
    Verified,
    Claimed,
    Active,
    Pending,
}

impl CitationStatus {
    /// Verified, claimed and active listings count as live citations.
    pub fn is_live(self) -> bool {
        matches!(
            self,
            CitationStatus::Verified | CitationStatus::Claimed | CitationStatus::Active
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Citation {
    pub platform: String,
    pub status: CitationStatus,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Keyword {
    pub keyword: String,
    /// Monthly search volume.
    pub volume: u32,
    /// 0-100.
    pub difficulty: u8,
    /// Search result position, 1 is best.
    pub rank: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecommendationType {
    Citations,
    Keywords,
    Reviews,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub priority: Priority,
    pub action: String,
    pub impact: String,
}

/// Body of `GET /api/dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub seo_score: f64,
    pub citation_count: usize,
    pub keyword_count: usize,
    /// `None` when no keywords are tracked.
    pub avg_rank: Option<f64>,
    pub business: BusinessProfile,
}
