//! Export wizard modal

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::models::{Category, Fulfillment, ProductListing, WizardStep};
use crate::theme::Theme;
use crate::utils::format_price;
use crate::wizard::{ExportWizard, COMPLIANCE_RULES};

use super::helpers::{centered_rect, spinner_frame};

const MODAL_HEIGHT: u16 = 18;

pub fn render_wizard(
    area: Rect,
    wizard: &ExportWizard,
    listing: &ProductListing,
    tick: u64,
    theme: &Theme,
    frame: &mut Frame,
) {
    let modal = centered_rect(60, MODAL_HEIGHT, area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(Span::styled(" 🛍  Export to Amazon ", theme.heading()))
        .title_bottom(Line::from(Span::styled(" Esc to close ", theme.label())).right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.bg_secondary).fg(theme.text_primary));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Step indicator
            Constraint::Min(3),    // Step body
            Constraint::Length(1), // Navigation buttons
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(step_indicator(wizard.step(), theme)), layout[0]);

    let mut body = vec![Line::from(Span::styled(wizard.step().title(), theme.heading())), Line::raw("")];
    body.extend(match wizard.step() {
        WizardStep::Details => details_lines(wizard, theme),
        WizardStep::Compliance => compliance_lines(theme),
        WizardStep::Review => review_lines(wizard, listing, theme),
    });
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), layout[1]);

    frame.render_widget(Paragraph::new(navigation_line(wizard, tick, theme)), layout[2]);
}

/// `(1)──(2)──(3)` with completed steps checked
pub fn step_indicator<'a>(step: WizardStep, theme: &Theme) -> Line<'a> {
    let current = step.number();
    let mut spans = Vec::new();
    for n in 1..=3u8 {
        let (text, style) = if n < current {
            ("✓".to_string(), Style::default().fg(theme.bg_primary).bg(theme.accent))
        } else if n == current {
            (n.to_string(), Style::default().fg(theme.bg_primary).bg(theme.accent))
        } else {
            (n.to_string(), Style::default().fg(theme.text_muted).bg(theme.bg_tertiary))
        };
        spans.push(Span::styled(format!(" {} ", text), style));
        if n < 3 {
            let color = if n < current { theme.accent } else { theme.border };
            spans.push(Span::styled("──────", Style::default().fg(color)));
        }
    }
    Line::from(spans)
}

fn details_lines<'a>(wizard: &ExportWizard, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled("Category (↑↓)", theme.label()))];
    for category in Category::ALL {
        let selected = category == wizard.category;
        let marker = if selected { "▸ " } else { "  " };
        let style = if selected {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        lines.push(Line::from(Span::styled(format!("{}{}", marker, category.label()), style)));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("Fulfillment Method (←→)", theme.label())));
    let mut radios = Vec::new();
    for option in [Fulfillment::Fba, Fulfillment::Fbm] {
        let radio = if option == wizard.fulfillment { "◉" } else { "○" };
        radios.push(Span::styled(
            format!("{} {}   ", radio, option.option_label()),
            Style::default().fg(theme.text_primary),
        ));
    }
    lines.push(Line::from(radios));
    lines
}

fn compliance_lines<'a>(theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(vec![
        Span::styled("⚠ ", Style::default().fg(theme.accent)),
        Span::styled(
            "Please ensure your listing complies with Amazon's policies:",
            Style::default().fg(theme.text_primary),
        ),
    ])];
    for rule in COMPLIANCE_RULES {
        lines.push(Line::from(Span::styled(
            format!("  • {}", rule),
            Style::default().fg(theme.text_secondary),
        )));
    }
    lines
}

fn review_lines<'a>(wizard: &ExportWizard, listing: &ProductListing, theme: &Theme) -> Vec<Line<'a>> {
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<13}", label), theme.label()),
            Span::styled(value, Style::default().fg(theme.text_primary)),
        ])
    };
    vec![
        row("Title", listing.title.clone()),
        row("Price", format_price(listing.price)),
        row("Category", wizard.category.label().to_string()),
        row("Fulfillment", wizard.fulfillment.review_label().to_string()),
    ]
}

fn navigation_line<'a>(wizard: &ExportWizard, tick: u64, theme: &Theme) -> Line<'a> {
    let back = if wizard.step() != WizardStep::Details {
        Span::styled(" [b] Back ", Style::default().fg(theme.text_secondary).bg(theme.bg_tertiary))
    } else {
        Span::raw("")
    };
    let primary_label = if wizard.is_exporting() {
        format!(" {} Exporting... ", spinner_frame(tick))
    } else if wizard.step() == WizardStep::Review {
        " [Enter] Export to Amazon ".to_string()
    } else {
        " [Enter] Continue ".to_string()
    };
    let primary_style = if wizard.is_exporting() {
        Style::default().fg(theme.text_muted).bg(theme.bg_tertiary)
    } else {
        Style::default()
            .fg(theme.bg_primary)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    };
    Line::from(vec![back, Span::raw("   "), Span::styled(primary_label, primary_style)])
}
