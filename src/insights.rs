//! Derived values for the market insights pane.

use crate::models::ProductListing;

/// Mean competitor price.
///
/// Absent or empty competitor lists yield 0.0 (sum defaults to 0, count
/// to 1). The mean is taken over the real sum; a listing with competitors
/// never shows the bare sum.
pub fn average_competitor_price(listing: &ProductListing) -> f64 {
    let prices = listing.competitor_prices.as_deref().unwrap_or_default();
    // Float `sum()` of an empty iterator is -0.0
    let sum = prices.iter().fold(0.0, |acc, c| acc + c.price);
    let count = prices.len().max(1);
    sum / count as f64
}

/// Sentiment score as a whole percentage, clamped to 0..=100
pub fn sentiment_percent(score: f64) -> u16 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u16
}

/// Chart points `(index, price)` and y bounds for the price history
pub fn price_history_series(listing: &ProductListing) -> (Vec<(f64, f64)>, [f64; 2]) {
    let history = listing.price_history.as_deref().unwrap_or_default();
    let points: Vec<(f64, f64)> = history
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.price))
        .collect();

    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });
    let bounds = if points.is_empty() {
        [0.0, 1.0]
    } else {
        // Pad so a flat series still has a visible range
        let pad = ((max - min) * 0.1).max(0.5);
        [(min - pad).max(0.0), max + pad]
    };
    (points, bounds)
}
