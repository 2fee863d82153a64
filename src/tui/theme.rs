//! Theme system for TUI colors and styles
//!
//! Status colors match the CLI badges in `display.rs`.

use iocraft::prelude::Color;

use crate::app::Severity;
use crate::types::TicketStatus;

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

#[derive(Debug, Clone)]
pub struct Theme {
    pub status_open: Color,
    pub status_in_progress: Color,
    pub status_closed: Color,

    pub success: Color,
    pub error: Color,
    pub info: Color,

    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_open: Color::Yellow,
            status_in_progress: Color::Cyan,
            status_closed: Color::Green,

            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,

            border: GRAY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    pub fn status_color(&self, status: TicketStatus) -> Color {
        match status {
            TicketStatus::Open => self.status_open,
            TicketStatus::InProgress => self.status_in_progress,
            TicketStatus::Closed => self.status_closed,
        }
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Success => self.success,
            Severity::Error => self.error,
            Severity::Info => self.info,
        }
    }

    /// Border for a pane, brighter when it has keyboard focus
    pub fn pane_border(&self, has_focus: bool) -> Color {
        if has_focus {
            self.border_focused
        } else {
            self.border
        }
    }
}

pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

pub fn theme() -> &'static Theme {
    &THEME
}
