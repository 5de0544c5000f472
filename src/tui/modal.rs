// Modal overlays
//
// Modals handle their own input and return an action; App holds an
// Option<Modal> and acts on the returned ModalAction. While a modal is open
// it receives every key first.

use crate::models::Joke;
use crate::tui::theme::Theme;
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, nothing to do
    None,
    Close,
    /// Copy the joke as plain text
    CopyText,
    /// Copy the joke as JSON
    CopyJson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Full view of the joke at this index
    JokeDetail(usize),
}

impl Modal {
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::JokeDetail(_) => match key {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => ModalAction::Close,
                KeyCode::Char('y') => ModalAction::CopyText,
                KeyCode::Char('Y') => ModalAction::CopyJson,
                _ => ModalAction::None,
            },
        }
    }

    /// Joke index for a detail modal
    pub fn joke_index(&self) -> Option<usize> {
        match self {
            Modal::JokeDetail(idx) => Some(*idx),
            Modal::Help => None,
        }
    }

    /// Render as a centered overlay
    pub fn render(&self, f: &mut Frame, jokes: &[Joke], theme: &Theme) {
        match self {
            Modal::Help => render_help(f, theme),
            Modal::JokeDetail(idx) => {
                // The list may have been replaced since the modal opened
                if let Some(joke) = jokes.get(*idx) {
                    render_detail(f, joke, theme);
                }
            }
        }
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn overlay_block<'a>(title: &'a str, footer: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight))
        .border_type(theme.border_type)
        .title(title)
        .title_bottom(Line::from(footer).centered())
}

fn render_help(f: &mut Frame, theme: &Theme) {
    let key_style = Style::default().fg(theme.punchline);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);

    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Jokes", header_style)),
        kb("c", "Cycle category"),
        kb("f, r", "Fetch jokes"),
        kb("Enter", "Open dropdown / press / details"),
        Line::raw(""),
        Line::from(Span::styled("  Navigation", header_style)),
        kb("Tab", "Focus next"),
        kb("Shift+Tab", "Focus previous"),
        kb("↑/↓, j/k", "Move selection"),
        kb("Home/End", "Jump to start/end"),
        kb("Esc", "Close / clear selection"),
        Line::raw(""),
        Line::from(Span::styled("  Clipboard", header_style)),
        kb("y", "Copy joke (text)"),
        kb("Y", "Copy joke (JSON)"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("l", "Toggle system logs"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
    ]);

    let area = centered_rect(48, 24, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(content)
            .style(Style::default().bg(theme.background))
            .block(overlay_block(" Help ", " Press ? or Esc to close ", theme)),
        area,
    );
}

fn render_detail(f: &mut Frame, joke: &Joke, theme: &Theme) {
    let label = Style::default().fg(theme.muted);

    let mut lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Setup      ", label),
            Span::styled(joke.setup.as_str(), Style::default().fg(theme.setup)),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Punchline  ", label),
            Span::styled(
                joke.punchline.as_str(),
                Style::default()
                    .fg(theme.punchline)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        Line::from(Span::styled(format!("  id {}", joke.id), label)),
        Line::raw(""),
    ];

    if let Ok(json) = serde_json::to_string_pretty(joke) {
        lines.extend(
            json.lines()
                .map(|l| Line::from(Span::styled(format!("  {}", l), label))),
        );
    }

    let area = centered_rect(f.area().width * 8 / 10, 18, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(Text::from(lines))
            .style(Style::default().bg(theme.background))
            .wrap(Wrap { trim: false })
            .block(overlay_block(
                " Joke ",
                " y:copy  Y:copy JSON  Esc:close ",
                theme,
            )),
        area,
    );
}
