//! Stat card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::theme::Theme;
use crate::utils::format_price;

fn stat_card(label: &str, value: String, color: Color, theme: &Theme) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_tertiary));

    let content = vec![
        Line::from(Span::styled(label.to_uppercase(), Style::default().fg(theme.text_muted))),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center)
}

/// Render recommended and average competitor price cards side by side
pub fn render_price_cards(
    area: Rect,
    recommended_price: f64,
    average_competitor_price: f64,
    theme: &Theme,
    frame: &mut Frame,
) {
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let recommended = stat_card(
        "Recommended Price",
        format_price(recommended_price),
        theme.accent,
        theme,
    );
    frame.render_widget(recommended, card_layout[0]);

    let competitor = stat_card(
        "Average Competitor Price",
        format_price(average_competitor_price),
        theme.price,
        theme,
    );
    frame.render_widget(competitor, card_layout[1]);
}
