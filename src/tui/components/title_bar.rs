// Title bar component
//
// App name and version, with a spinner while a fetch is in flight.

use crate::config::VERSION;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let indicator = if ctx.page.is_loading() {
        format!(" {} fetching", ctx.spinner_char())
    } else {
        String::new()
    };

    let title = Paragraph::new(format!(" 🃏 jokebox v{}{}", VERSION, indicator))
        .style(
            Style::default()
                .fg(ctx.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ctx.theme.border_type)
                .border_style(Style::default().fg(ctx.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
