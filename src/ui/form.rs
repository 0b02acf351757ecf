//! Post intake form rendering

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::form::MAX_CONTENT_LEN;
use crate::models::{Focus, Platform};
use crate::theme::Theme;

use super::helpers::{pane_block, spinner_frame};

const CURSOR: &str = "▏";

/// Height the form wants, including borders
pub const FORM_HEIGHT: u16 = 16;

fn field_label<'a>(label: &'a str, focused: bool, theme: &Theme) -> Span<'a> {
    let style = if focused {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        theme.label()
    };
    Span::styled(label, style)
}

pub fn render_form(area: Rect, app: &App, theme: &Theme, frame: &mut Frame) {
    let focused = app.focus.is_form_field() && app.wizard.is_none();
    let block = pane_block(" Analyze Social Media Post ", focused, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let disabled = app.is_generating;
    let value_style = if disabled {
        Style::default().fg(theme.text_muted)
    } else {
        Style::default().fg(theme.text_primary)
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Platform
            Constraint::Length(2), // URL
            Constraint::Min(3),    // Content
            Constraint::Length(2), // Compliance notice
            Constraint::Length(1), // Submit button
        ])
        .split(inner);

    // Platform selector
    let mut platform_spans = vec![field_label("Platform  ", app.focus == Focus::Platform, theme)];
    for platform in Platform::ALL {
        let style = if platform == app.form.platform {
            value_style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme.text_muted)
        };
        platform_spans.push(Span::styled(format!(" {} ", platform.label()), style));
        platform_spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(platform_spans)), layout[0]);

    // URL
    let url_focused = app.focus == Focus::Url;
    let url_text = if app.form.url.is_empty() && !url_focused {
        Span::styled("https://...", Style::default().fg(theme.text_muted))
    } else {
        Span::styled(app.form.url.clone(), value_style)
    };
    let mut url_spans = vec![field_label("Post URL  ", url_focused, theme), url_text];
    if url_focused && !disabled {
        url_spans.push(Span::styled(CURSOR, Style::default().fg(theme.accent)));
    }
    frame.render_widget(Paragraph::new(Line::from(url_spans)), layout[1]);

    // Content with counter
    let content_focused = app.focus == Focus::Content;
    let count = app.form.content_len();
    let count_style = if count > MAX_CONTENT_LEN {
        Style::default().fg(theme.error)
    } else {
        theme.label()
    };
    let mut lines = vec![Line::from(vec![
        field_label("Post Content  ", content_focused, theme),
        Span::styled(format!("{}/{}", count, MAX_CONTENT_LEN), count_style),
    ])];
    if app.form.content.is_empty() && !content_focused {
        lines.push(Line::from(Span::styled(
            "Paste your post content here...",
            Style::default().fg(theme.text_muted),
        )));
    } else {
        let mut content_lines: Vec<Line> = app
            .form
            .content
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if content_focused && !disabled {
            if let Some(last) = content_lines.last_mut() {
                last.push_span(Span::styled(CURSOR, Style::default().fg(theme.accent)));
            }
        }
        // Keep the tail visible when the post is longer than the box
        let visible = layout[2].height.saturating_sub(1) as usize;
        let skip = content_lines.len().saturating_sub(visible.max(1));
        lines.extend(content_lines.into_iter().skip(skip));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), layout[2]);

    let notice = Paragraph::new(Line::from(vec![
        Span::styled("⚠ ", Style::default().fg(theme.warning)),
        Span::styled(
            "Ensure your content complies with Amazon's listing policies.",
            Style::default().fg(theme.warning),
        ),
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(notice, layout[3]);

    let button = if disabled {
        Line::from(Span::styled(
            format!("{} Generating Listing...", spinner_frame(app.animation_tick)),
            Style::default().fg(theme.text_muted),
        ))
    } else {
        Line::from(Span::styled(
            "  Generate Listing (^G)  ",
            Style::default()
                .fg(theme.bg_primary)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(Paragraph::new(button).alignment(Alignment::Center), layout[4]);
}
