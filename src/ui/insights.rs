//! Market insights pane: price history, audience, angles, trends, sentiment

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Chart, Dataset, Gauge, GraphType, Paragraph, Wrap},
};

use crate::insights::{average_competitor_price, price_history_series, sentiment_percent};
use crate::models::{PricePoint, ProductListing, SentimentAnalysis};
use crate::theme::Theme;
use crate::utils::format_price;

use super::helpers::{pane_block, section_heading};
use super::stats::render_price_cards;

/// Render insights for `listing`; draws nothing unless the listing carries
/// both AI suggestions and a price history
pub fn render_insights(area: Rect, listing: &ProductListing, theme: &Theme, frame: &mut Frame) {
    let (Some(suggestions), Some(history)) = (&listing.ai_suggestions, &listing.price_history) else {
        return;
    };

    let block = pane_block(" 📈 Market Insights ", false, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let has_sentiment = listing.sentiment.is_some();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                   // Price heading
            Constraint::Length(7),                                   // Chart
            Constraint::Length(4),                                   // Price cards
            Constraint::Min(4),                                      // Lists
            Constraint::Length(if has_sentiment { 5 } else { 0 }), // Sentiment
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(section_heading("Price Analysis", theme)), layout[0]);
    render_price_chart(layout[1], listing, history, theme, frame);
    render_price_cards(
        layout[2],
        suggestions.recommended_price,
        average_competitor_price(listing),
        theme,
        frame,
    );

    let mut lines = vec![section_heading("Target Audience", theme)];
    let mut chips = Vec::new();
    for audience in &suggestions.target_audience {
        chips.push(Span::styled(
            format!(" {} ", audience),
            Style::default().fg(theme.success).bg(theme.bg_tertiary),
        ));
        chips.push(Span::raw(" "));
    }
    lines.push(Line::from(chips));
    lines.push(Line::raw(""));

    lines.push(section_heading("Marketing Angles", theme));
    for angle in &suggestions.marketing_angles {
        lines.push(Line::from(vec![
            Span::styled(" • ", Style::default().fg(theme.accent)),
            Span::styled(angle.as_str(), Style::default().fg(theme.text_secondary)),
        ]));
    }
    lines.push(Line::raw(""));

    lines.push(section_heading("Seasonal Trends", theme));
    for trend in &suggestions.seasonal_trends {
        lines.push(Line::from(vec![
            Span::styled(" ◆ ", Style::default().fg(theme.warning)),
            Span::styled(trend.as_str(), Style::default().fg(theme.text_secondary)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), layout[3]);

    if let Some(sentiment) = listing.sentiment.as_ref() {
        render_sentiment(layout[4], sentiment, theme, frame);
    }
}

fn render_price_chart(
    area: Rect,
    listing: &ProductListing,
    history: &[PricePoint],
    theme: &Theme,
    frame: &mut Frame,
) {
    let (points, [y_min, y_max]) = price_history_series(listing);
    if points.is_empty() {
        return;
    }

    let dataset = Dataset::default()
        .name("price")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme.accent))
        .data(&points);

    let x_labels: Vec<Line> = history
        .iter()
        .map(|p| Line::from(p.date.clone()))
        .collect();
    let x_max = (points.len().saturating_sub(1)).max(1) as f64;

    let chart = Chart::new(vec![dataset])
        .style(Style::default().bg(theme.bg_secondary))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme.text_muted))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme.text_muted))
                .bounds([y_min, y_max])
                .labels(vec![
                    Line::from(format_price(y_min)),
                    Line::from(format_price(y_max)),
                ]),
        );
    frame.render_widget(chart, area);
}

fn render_sentiment(area: Rect, sentiment: &SentimentAnalysis, theme: &Theme, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Positive keywords
            Constraint::Length(1), // Areas for improvement
        ])
        .split(area);

    frame.render_widget(Paragraph::new(section_heading("Sentiment Analysis", theme)), layout[0]);

    let percent = sentiment_percent(sentiment.score);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.success).bg(theme.bg_tertiary))
        .percent(percent)
        .label(format!("{}%", percent));
    frame.render_widget(gauge, layout[1]);

    let keyword_line = |label: &'static str, words: &[String], color: Color| {
        let mut spans = vec![Span::styled(label, theme.label())];
        for word in words {
            spans.push(Span::styled(format!(" {} ", word), Style::default().fg(color)));
        }
        Line::from(spans)
    };
    frame.render_widget(
        Paragraph::new(keyword_line(
            "Positive Keywords:",
            &sentiment.positive_keywords,
            theme.success,
        )),
        layout[2],
    );
    frame.render_widget(
        Paragraph::new(keyword_line(
            "Areas for Improvement:",
            &sentiment.negative_keywords,
            theme.error,
        )),
        layout[3],
    );
}
