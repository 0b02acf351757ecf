//! Theme module for listing-tui
//!
//! Centralized color palettes for dark and light mode. The header toggle
//! swaps between the two.

use ratatui::style::{Color, Modifier, Style};

use crate::notify::NoticeKind;

/// Color palette used by every pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,
    pub border: Color,
    pub accent: Color,
    pub accent_dim: Color,
    pub price: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
}

// ============================================================================
// Dark - deep space palette
// ============================================================================

pub const DARK: Theme = Theme {
    bg_primary: Color::Rgb(10, 14, 20),
    bg_secondary: Color::Rgb(18, 22, 28),
    bg_tertiary: Color::Rgb(26, 31, 38),
    border: Color::Rgb(30, 37, 48),
    // Purple accent (#8b5cf6)
    accent: Color::Rgb(139, 92, 246),
    accent_dim: Color::Rgb(91, 60, 170),
    // Amazon orange (#ff9900)
    price: Color::Rgb(255, 153, 0),
    success: Color::Rgb(74, 222, 128),
    warning: Color::Rgb(251, 191, 36),
    error: Color::Rgb(248, 113, 113),
    text_primary: Color::Rgb(226, 232, 240),
    text_secondary: Color::Rgb(148, 163, 184),
    text_muted: Color::Rgb(100, 116, 139),
};

// ============================================================================
// Light - paper palette
// ============================================================================

pub const LIGHT: Theme = Theme {
    bg_primary: Color::Rgb(249, 250, 251),
    bg_secondary: Color::Rgb(255, 255, 255),
    bg_tertiary: Color::Rgb(243, 244, 246),
    border: Color::Rgb(209, 213, 219),
    accent: Color::Rgb(124, 58, 237),
    accent_dim: Color::Rgb(196, 181, 253),
    price: Color::Rgb(194, 65, 12),
    success: Color::Rgb(22, 163, 74),
    warning: Color::Rgb(202, 138, 4),
    error: Color::Rgb(220, 38, 38),
    text_primary: Color::Rgb(17, 24, 39),
    text_secondary: Color::Rgb(75, 85, 99),
    text_muted: Color::Rgb(107, 114, 128),
};

impl Theme {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { DARK } else { LIGHT }
    }

    /// Border color for a pane, highlighted when focused
    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.accent } else { self.border };
        Style::default().fg(color)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn notice_color(&self, kind: NoticeKind) -> Color {
        match kind {
            NoticeKind::Success => self.success,
            NoticeKind::Error => self.error,
        }
    }
}
