//! "Generate Random Jokes" button
//!
//! Pressing it only records the press; the App picks it up through
//! `take_pressed()` and starts the fetch.

use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const BUTTON_LABEL: &str = "Generate Random Jokes";

#[derive(Debug, Default)]
pub struct FetchButton {
    pressed: bool,
}

impl FetchButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    /// Take a pending press
    pub fn take_pressed(&mut self) -> bool {
        std::mem::take(&mut self.pressed)
    }
}

impl Component for FetchButton {
    fn id(&self) -> ComponentId {
        ComponentId::FetchButton
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let label = if ctx.page.is_loading() {
            format!("{} {}", ctx.spinner_char(), BUTTON_LABEL)
        } else {
            BUTTON_LABEL.to_string()
        };

        let mut style = Style::default().fg(ctx.theme.button);
        if ctx.is_focused(self.id()) {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }

        let widget = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(ctx.theme.border_type)
                    .border_style(Style::default().fg(ctx.border_color(self.id()))),
            );

        f.render_widget(widget, area);
    }
}

impl Interactive for FetchButton {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.press();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("Enter:fetch jokes")
    }
}
