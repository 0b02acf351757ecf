//! Toast notifications stacked in the top-right corner

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::notify::{NoticeKind, Toasts};
use crate::theme::Theme;

use super::helpers::wrap_text;

const TOAST_WIDTH: u16 = 44;

fn icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "✔",
        NoticeKind::Error => "✖",
    }
}

pub fn render_toasts(area: Rect, toasts: &Toasts, theme: &Theme, frame: &mut Frame) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);
    let mut y = area.y + 1;

    for toast in toasts.iter() {
        // Icon takes two columns, borders two more
        let text_width = width.saturating_sub(4 + 2) as usize;
        let height = wrap_text(&toast.message, text_width).len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, height);
        let color = theme.notice_color(toast.kind);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme.bg_tertiary));
        let text = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", icon(toast.kind)), Style::default().fg(color)),
            Span::styled(toast.message.as_str(), Style::default().fg(theme.text_primary)),
        ]))
        .wrap(Wrap { trim: true })
        .block(block);

        frame.render_widget(Clear, rect);
        frame.render_widget(text, rect);
        y += height;
    }
}
