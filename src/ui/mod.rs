//! UI module for listing-tui
//!
//! Rendering is a pure function of `App`: the composition root lays out
//! the panes and hands each renderer a read-only view of the state.

mod form;
mod header;
mod helpers;
mod insights;
mod preview;
mod stats;
mod suggestions;
mod toasts;
mod wizard;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::theme::Theme;

/// Draw the whole application
pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::for_mode(app.dark_mode);
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    // Header, main content area, bottom bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(3),    // Main content area
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(area);

    header::render_header(main_layout[0], app, &theme, frame);

    // Left column: form, suggestions, insights. Right column: preview
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_layout[1]);

    let suggestion_rows = app
        .listing
        .as_ref()
        .map_or(0, |l| suggestions::suggestions_height(l.suggested_titles().len()));
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(form::FORM_HEIGHT),
            Constraint::Length(suggestion_rows),
            Constraint::Min(0),
        ])
        .split(panels[0]);

    form::render_form(left[0], app, &theme, frame);
    if let Some(listing) = app.listing.as_ref() {
        suggestions::render_suggestions(left[1], app, &theme, frame);
        insights::render_insights(left[2], listing, &theme, frame);
    }
    preview::render_preview(panels[1], app, &theme, frame);

    header::render_bottom_bar(main_layout[2], app, &theme, frame);

    if let (Some(wizard), Some(listing)) = (app.wizard.as_ref(), app.listing.as_ref()) {
        wizard::render_wizard(area, wizard, listing, app.animation_tick, &theme, frame);
    }
    toasts::render_toasts(main_layout[1], &app.toasts, &theme, frame);
}
