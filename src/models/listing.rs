//! Product listing data structures
//!
//! The listing is the single piece of application state. Field names
//! serialize in camelCase so the same shape can be posted to a backend.

use serde::{Deserialize, Serialize};

/// Competitor offer used by the market insights pane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorPrice {
    pub name: String,
    pub price: f64,
}

/// Historical price point (`date` is a `YYYY-MM` label)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    /// Positivity in `[0, 1]`
    pub score: f64,
    pub positive_keywords: Vec<String>,
    pub negative_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestions {
    pub recommended_price: f64,
    pub target_audience: Vec<String>,
    pub marketing_angles: Vec<String>,
    pub seasonal_trends: Vec<String>,
}

/// Generated product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub title: String,
    pub description: String,
    pub bullet_points: Vec<String>,
    pub category: String,
    pub keywords: Vec<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_titles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitor_prices: Option<Vec<CompetitorPrice>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_history: Option<Vec<PricePoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_suggestions: Option<AiSuggestions>,
}

impl ProductListing {
    /// Copy of this listing with only the title replaced
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or_default()
    }

    pub fn suggested_titles(&self) -> &[String] {
        self.suggested_titles.as_deref().unwrap_or_default()
    }
}
