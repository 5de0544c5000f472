// Status bar component
//
// Bottom line: category, joke count, focus hints. The last reported error
// message replaces the hints while error display is enabled.

use crate::tui::traits::RenderContext;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the status bar shows besides page state
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusLine<'a> {
    /// Current error message (empty = none)
    pub error: &'a str,
    /// Hint from the focused component
    pub hint: Option<&'a str>,
}

pub fn render(f: &mut Frame, area: Rect, ctx: &RenderContext, status: StatusLine) {
    let page = ctx.page;
    let mut spans = vec![Span::styled(
        format!(
            " {} │ {} jokes",
            page.category().label(),
            page.jokes().len()
        ),
        Style::default().fg(ctx.theme.status_bar),
    )];

    if page.is_loading() {
        spans.push(Span::styled(
            format!(" │ {} fetching", ctx.spinner_char()),
            Style::default().fg(ctx.theme.highlight),
        ));
    }

    if !status.error.is_empty() {
        spans.push(Span::styled(
            format!(" │ ✗ {}", status.error),
            Style::default()
                .fg(ctx.theme.error)
                .add_modifier(Modifier::BOLD),
        ));
    } else if let Some(hint) = status.hint {
        spans.push(Span::styled(
            format!(" │ {}", hint),
            Style::default().fg(ctx.theme.muted),
        ));
    }

    spans.push(Span::styled(
        " │ Tab:focus  ?:help  q:quit",
        Style::default().fg(ctx.theme.muted),
    ));

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}
