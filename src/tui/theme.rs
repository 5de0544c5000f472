// Color theme for the TUI
//
// A single fixed palette; every component pulls its colors from here.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Resolved colors for all UI elements
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_type: BorderType,
    /// Focused panel border and toast border
    pub highlight: Color,
    pub title: Color,
    pub status_bar: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub punchline: Color,
    pub setup: Color,
    pub button: Color,
    pub error: Color,
    pub muted: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::DarkGray,
            border_type: BorderType::Rounded,
            highlight: Color::Cyan,
            title: Color::Magenta,
            status_bar: Color::Gray,
            selection: Color::Cyan,
            selection_fg: Color::Black,
            punchline: Color::Yellow,
            setup: Color::White,
            button: Color::Green,
            error: Color::Red,
            muted: Color::DarkGray,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }
}
