//! AI-suggested titles list

use ratatui::{
    prelude::*,
    widgets::{List, ListItem, ListState},
};

use crate::app::App;
use crate::models::Focus;
use crate::theme::Theme;

use super::helpers::pane_block;

/// Rows needed for `count` suggestions, including borders
pub fn suggestions_height(count: usize) -> u16 {
    count as u16 + 2
}

pub fn render_suggestions(area: Rect, app: &App, theme: &Theme, frame: &mut Frame) {
    let Some(listing) = app.listing.as_ref() else {
        return;
    };
    let focused = app.focus == Focus::Suggestions && app.wizard.is_none();

    let items: Vec<ListItem> = listing
        .suggested_titles()
        .iter()
        .map(|title| {
            let marker = if *title == listing.title { "✓ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.success)),
                Span::raw(title.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(pane_block(" 💡 AI-Suggested Titles ", focused, theme))
        .style(Style::default().fg(theme.text_secondary))
        .highlight_style(
            Style::default()
                .fg(theme.text_primary)
                .bg(theme.bg_tertiary)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected_title));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
