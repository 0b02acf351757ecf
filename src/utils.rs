//! Utility functions for common formatting.

/// Format a price as `$NN.NN`
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Truncate to `max` chars, marking the cut with `...`
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let take = max.saturating_sub(3);
    let truncated: String = text.chars().take(take).collect();
    format!("{}...", truncated)
}
