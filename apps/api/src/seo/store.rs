use std::collections::{BTreeMap, HashSet};

use thiserror::Error;
use tracing::debug;

use crate::seo::models::{BusinessProfile, Citation, CitationStatus, Day, Keyword};

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("Duplicate citation platform: {0}")]
    DuplicatePlatform(String),

    #[error("Duplicate keyword: {0}")]
    DuplicateKeyword(String),

    #[error("Keyword '{keyword}' has difficulty {difficulty}, expected 0-100")]
    DifficultyOutOfRange { keyword: String, difficulty: u8 },

    #[error("Keyword '{0}' has rank 0, ranks start at 1")]
    InvalidRank(String),
}

/// Read-only holder of the business profile, its citations and tracked keywords.
/// Built once at startup and shared behind an `Arc` in `AppState`.
#[derive(Debug, Clone)]
pub struct SeoStore {
    business: BusinessProfile,
    citations: Vec<Citation>,
    keywords: Vec<Keyword>,
}

impl SeoStore {
    /// Builds a store after checking key uniqueness and keyword ranges.
    pub fn new(
        business: BusinessProfile,
        citations: Vec<Citation>,
        keywords: Vec<Keyword>,
    ) -> Result<Self, StoreError> {
        let mut platforms = HashSet::new();
        for c in &citations {
            if !platforms.insert(c.platform.as_str()) {
                return Err(StoreError::DuplicatePlatform(c.platform.clone()));
            }
        }

        let mut phrases = HashSet::new();
        for k in &keywords {
            if !phrases.insert(k.keyword.as_str()) {
                return Err(StoreError::DuplicateKeyword(k.keyword.clone()));
            }
            if k.difficulty > 100 {
                return Err(StoreError::DifficultyOutOfRange {
                    keyword: k.keyword.clone(),
                    difficulty: k.difficulty,
                });
            }
            if k.rank == 0 {
                return Err(StoreError::InvalidRank(k.keyword.clone()));
            }
        }

        debug!(
            citations = citations.len(),
            keywords = keywords.len(),
            "SEO store built"
        );

        Ok(Self {
            business,
            citations,
            keywords,
        })
    }

    /// The fixed demo data set served by the dashboard.
    pub fn with_defaults() -> Result<Self, StoreError> {
        Self::new(default_business(), default_citations(), default_keywords())
    }

    pub fn business(&self) -> &BusinessProfile {
        &self.business
    }

    pub fn citations(&self) -> &[Citation] {
        &self.citations
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }
}

fn default_business() -> BusinessProfile {
    let weekday = "9:00 AM - 9:00 PM";
    let weekend = "9:00 AM - 10:00 PM";
    let hours = BTreeMap::from([
        (Day::Monday, weekday.to_string()),
        (Day::Tuesday, weekday.to_string()),
        (Day::Wednesday, weekday.to_string()),
        (Day::Thursday, weekday.to_string()),
        (Day::Friday, weekend.to_string()),
        (Day::Saturday, weekend.to_string()),
        (Day::Sunday, "10:00 AM - 8:00 PM".to_string()),
    ]);

    BusinessProfile {
        name: "Example Local Business".to_string(),
        address: "123 Main Street, City, State 12345".to_string(),
        phone: "+1-555-123-4567".to_string(),
        website: "https://example.com".to_string(),
        category: "Restaurant".to_string(),
        hours,
    }
}

fn default_citations() -> Vec<Citation> {
    [
        ("Google My Business", CitationStatus::Verified, "https://business.google.com"),
        ("Yelp", CitationStatus::Claimed, "https://yelp.com"),
        ("Facebook", CitationStatus::Active, "https://facebook.com"),
        ("Yellow Pages", CitationStatus::Pending, "https://yellowpages.com"),
        ("Bing Places", CitationStatus::Verified, "https://bing.com/places"),
    ]
    .into_iter()
    .map(|(platform, status, url)| Citation {
        platform: platform.to_string(),
        status,
        url: url.to_string(),
    })
    .collect()
}

fn default_keywords() -> Vec<Keyword> {
    [
        ("best restaurant near me", 1200, 65, 8),
        ("italian food downtown", 800, 45, 3),
        ("family restaurant", 950, 55, 12),
        ("pizza delivery", 1500, 70, 15),
        ("romantic dinner spot", 600, 40, 5),
    ]
    .into_iter()
    .map(|(keyword, volume, difficulty, rank)| Keyword {
        keyword: keyword.to_string(),
        volume,
        difficulty,
        rank,
    })
    .collect()
}
