//! Mock listing generator.
//!
//! Keyword extraction is the only computed part of a listing; everything
//! else is canned "AI" output.

use crate::models::{
    AiSuggestions, CompetitorPrice, PricePoint, ProductListing, SentimentAnalysis, SocialPost,
};

/// Maximum number of keywords taken from a post
pub const MAX_KEYWORDS: usize = 5;

/// Tokens must be longer than this (in chars) to count as keywords
pub const MIN_KEYWORD_LEN: usize = 3;

/// Characters of post content kept in the description
pub const DESCRIPTION_CHARS: usize = 500;

const BULLET_POINTS: [&str; 5] = [
    "100% ORGANIC: Pure and natural ingredients",
    "PREMIUM QUALITY: Highest grade available",
    "LAB TESTED: Third-party verified for purity",
    "SUSTAINABLY SOURCED: Environmentally conscious practices",
    "SATISFACTION GUARANTEED: Love it or your money back",
];

const IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1556228578-8c89e6adf883?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1556228720-195a672e8a03?auto=format&fit=crop&w=800&q=80",
];

const SUGGESTED_TITLES: [&str; 3] = [
    "Premium Organic Wellness Supplement",
    "Natural Health Booster",
    "Pure Wellness Formula",
];

/// Extract search keywords from raw post text.
///
/// Splits on the single space character only and keeps punctuation, so
/// `"great!"` stays `"great!"` and runs of spaces produce empty tokens that
/// the length filter drops.
pub fn extract_keywords(content: &str) -> Vec<String> {
    content
        .to_lowercase()
        .split(' ')
        .filter(|word| word.chars().count() > MIN_KEYWORD_LEN)
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

/// Build a listing description: the first 500 chars of content plus an ellipsis
pub fn describe(content: &str) -> String {
    let mut description: String = content.chars().take(DESCRIPTION_CHARS).collect();
    description.push_str("...");
    description
}

/// Generate the mock listing for a post
pub fn generate_listing(post: &SocialPost) -> ProductListing {
    ProductListing {
        title: "Premium Wellness Product".to_string(),
        description: describe(&post.content),
        bullet_points: to_strings(&BULLET_POINTS),
        category: "Health & Personal Care".to_string(),
        keywords: extract_keywords(&post.content),
        price: 29.99,
        images: Some(to_strings(&IMAGES)),
        suggested_titles: Some(to_strings(&SUGGESTED_TITLES)),
        competitor_prices: Some(vec![
            competitor("Competitor A", 34.99),
            competitor("Competitor B", 27.99),
            competitor("Competitor C", 31.99),
        ]),
        price_history: Some(vec![
            point("2024-01", 32.99),
            point("2024-02", 30.99),
            point("2024-03", 29.99),
        ]),
        sentiment: Some(SentimentAnalysis {
            score: 0.85,
            positive_keywords: to_strings(&["natural", "effective", "quality", "pure"]),
            negative_keywords: to_strings(&["expensive", "shipping"]),
        }),
        ai_suggestions: Some(AiSuggestions {
            recommended_price: 29.99,
            target_audience: to_strings(&[
                "Health Enthusiasts",
                "Organic Product Lovers",
                "Wellness Focused",
                "Age 25-45",
            ]),
            marketing_angles: to_strings(&[
                "Focus on natural ingredients",
                "Highlight lab testing",
                "Emphasize sustainability",
                "Stress quality assurance",
            ]),
            seasonal_trends: to_strings(&[
                "Peak demand in January (New Year)",
                "Summer wellness focus",
                "Holiday gift potential",
                "Spring cleanse season",
            ]),
        }),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn competitor(name: &str, price: f64) -> CompetitorPrice {
    CompetitorPrice {
        name: name.to_string(),
        price,
    }
}

fn point(date: &str, price: f64) -> PricePoint {
    PricePoint {
        date: date.to_string(),
        price,
    }
}
