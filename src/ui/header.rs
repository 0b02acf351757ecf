//! Header bar and bottom key hints

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::Focus;
use crate::theme::Theme;

pub fn render_header(area: Rect, app: &App, theme: &Theme, frame: &mut Frame) {
    let mode = if app.dark_mode { "☾ Dark" } else { "☀ Light" };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let line = Line::from(vec![
        Span::styled(" ✦ ", Style::default().fg(theme.accent)),
        Span::styled(
            "Social to Amazon",
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  AI-powered listing generator", theme.label()),
    ]);
    let mode_line = Line::from(vec![
        Span::styled(mode, Style::default().fg(theme.text_secondary)),
        Span::styled("  ^D ", theme.label()),
    ]);

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line), inner);
    frame.render_widget(Paragraph::new(mode_line).alignment(Alignment::Right), inner);
}

/// Context-sensitive key hints for the current focus
pub fn key_hints(app: &App) -> &'static str {
    if let Some(wizard) = app.wizard.as_ref() {
        return if wizard.is_exporting() {
            " Exporting... "
        } else {
            " Enter: Continue/Export | b: Back | ↑↓: Category | ←→: Fulfillment | Esc: Close "
        };
    }
    match app.focus {
        Focus::Platform => " ←→: Platform | Enter/^G: Generate | Tab: Next | ^D: Theme | ^Q: Quit ",
        Focus::Url => " Type URL | Enter/^G: Generate | Tab: Next | ^Q: Quit ",
        Focus::Content => " Type or paste post | ^G: Generate | Tab: Next | ^Q: Quit ",
        Focus::Suggestions => " ↑↓: Choose | Enter: Use title | Tab: Next | ^Q: Quit ",
        Focus::Preview => " ←→: Images | ↑↓: Scroll | e: Export to Amazon | Tab: Next | ^Q: Quit ",
    }
}

pub fn render_bottom_bar(area: Rect, app: &App, theme: &Theme, frame: &mut Frame) {
    let keybindings = Paragraph::new(key_hints(app))
        .style(Style::default().fg(theme.bg_primary).bg(theme.accent));
    frame.render_widget(keybindings, area);
}
