//! Amazon listing preview pane

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::carousel::Carousel;
use crate::models::{Focus, ProductListing};
use crate::theme::Theme;
use crate::utils::{format_price, truncate_chars};

use super::helpers::{pane_block, section_heading};

pub const PLACEHOLDER: &str =
    "Enter your social media post details to generate an Amazon listing preview";

pub fn render_preview(area: Rect, app: &App, theme: &Theme, frame: &mut Frame) {
    let focused = app.focus == Focus::Preview && app.wizard.is_none();
    let block = pane_block(" Amazon Listing Preview ", focused, theme);

    let Some(listing) = app.listing.as_ref() else {
        let placeholder = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled("📦", Style::default().fg(theme.text_muted))),
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.text_muted))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let inner_width = area.width.saturating_sub(4) as usize;
    let lines = listing_lines(listing, &app.carousel, inner_width, theme);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.preview_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn carousel_lines<'a>(
    images: &'a [String],
    carousel: &Carousel,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let Some(index) = carousel.current(images.len()) else {
        return Vec::new();
    };
    let mut header = vec![Span::styled(
        format!("🖼  Image {}/{}", index + 1, images.len()),
        Style::default().fg(theme.text_secondary),
    )];
    if Carousel::has_controls(images.len()) {
        header.push(Span::styled("   ◀ ", Style::default().fg(theme.accent)));
        for i in 0..images.len() {
            let dot = if i == index { "● " } else { "○ " };
            header.push(Span::styled(dot, Style::default().fg(theme.text_primary)));
        }
        header.push(Span::styled("▶", Style::default().fg(theme.accent)));
    }
    vec![
        Line::from(header),
        Line::from(Span::styled(
            truncate_chars(&images[index], width),
            Style::default()
                .fg(theme.text_muted)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::raw(""),
    ]
}

/// All preview lines for a listing, top to bottom
pub fn listing_lines<'a>(
    listing: &'a ProductListing,
    carousel: &Carousel,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let mut lines = carousel_lines(listing.images(), carousel, width, theme);

    lines.push(Line::from(Span::styled(
        listing.title.as_str(),
        Style::default()
            .fg(theme.text_primary)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format_price(listing.price),
        Style::default().fg(theme.price).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::raw(""));

    lines.push(section_heading("About this item", theme));
    for point in &listing.bullet_points {
        lines.push(Line::from(vec![
            Span::styled(" ✔ ", Style::default().fg(theme.success)),
            Span::styled(point.as_str(), Style::default().fg(theme.text_secondary)),
        ]));
    }
    lines.push(Line::raw(""));

    lines.push(section_heading("Product Description", theme));
    lines.push(Line::from(Span::styled(
        listing.description.as_str(),
        Style::default().fg(theme.text_secondary),
    )));
    lines.push(Line::raw(""));

    lines.push(section_heading("Category", theme));
    lines.push(Line::from(Span::styled(
        format!(" {} ", listing.category),
        Style::default().fg(theme.accent).bg(theme.bg_tertiary),
    )));
    lines.push(Line::raw(""));

    lines.push(section_heading("Search Terms", theme));
    let mut chips = Vec::new();
    for keyword in &listing.keywords {
        chips.push(Span::styled(
            format!(" {} ", keyword),
            Style::default().fg(theme.text_primary).bg(theme.bg_tertiary),
        ));
        chips.push(Span::raw(" "));
    }
    lines.push(Line::from(chips));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "[ e ] Export to Amazon",
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    )));

    lines
}
