//! Joke list panel
//!
//! One row per joke: punchline first, then setup. Owns its scroll and
//! selection state; the jokes themselves come from the page via the render
//! context.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::models::Joke;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub struct JokeList {
    scroll: ScrollState,
    /// Selected row (None until the user navigates)
    pub selected: Option<usize>,
    /// Cached joke count for bounds checking
    count: usize,
}

impl JokeList {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
            selected: None,
            count: 0,
        }
    }

    /// Sync with the current jokes and viewport (call before rendering)
    pub fn sync(&mut self, count: usize, viewport: usize) {
        self.count = count;
        self.scroll.update_dimensions(count, viewport);

        if let Some(idx) = self.selected {
            if idx >= count {
                self.selected = count.checked_sub(1);
            }
        }
    }

    /// Back to the top with no selection (new list arrived)
    pub fn reset(&mut self) {
        self.selected = None;
        self.scroll.scroll_to_top();
    }

    /// The selected joke, if any
    pub fn selected_joke<'a>(&self, jokes: &'a [Joke]) -> Option<&'a Joke> {
        self.selected.and_then(|idx| jokes.get(idx))
    }

    fn select(&mut self, index: usize) {
        if self.count == 0 {
            return;
        }
        let index = index.min(self.count - 1);
        self.selected = Some(index);
        self.scroll.ensure_visible(index);
    }

    fn select_next(&mut self) {
        match self.selected {
            Some(idx) => self.select(idx + 1),
            None => self.select(self.scroll.offset()),
        }
    }

    fn select_previous(&mut self) {
        match self.selected {
            Some(idx) => self.select(idx.saturating_sub(1)),
            None => self.select(self.scroll.offset()),
        }
    }
}

impl Default for JokeList {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for JokeList {
    fn id(&self) -> ComponentId {
        ComponentId::JokeList
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let jokes = ctx.page.jokes();

        let title = format!(" Jokes ({}) ", jokes.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(Style::default().fg(ctx.border_color(self.id())))
            .title(title);

        if jokes.is_empty() {
            let hint = Paragraph::new(" Press Enter on the button (or f) to fetch jokes")
                .style(Style::default().fg(ctx.theme.muted))
                .block(block);
            f.render_widget(hint, area);
            return;
        }

        let (start, end) = self.scroll.visible_range();
        let items: Vec<ListItem> = ctx
            .page
            .rows()
            .enumerate()
            .skip(start)
            .take(end - start)
            .map(|(idx, (punchline, setup))| {
                let line = Line::from(vec![
                    Span::styled(
                        punchline.to_string(),
                        Style::default()
                            .fg(ctx.theme.punchline)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(setup.to_string(), Style::default().fg(ctx.theme.setup)),
                ]);

                let item = ListItem::new(line);
                if focused && self.selected == Some(idx) {
                    item.style(
                        Style::default()
                            .fg(ctx.theme.selection_fg)
                            .bg(ctx.theme.selection),
                    )
                } else {
                    item
                }
            })
            .collect();

        f.render_widget(List::new(items).block(block), area);
        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Arrows);
    }
}

impl Interactive for JokeList {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Handled::Yes
            }
            KeyCode::Home => {
                self.select(0);
                self.scroll.scroll_to_top();
                Handled::Yes
            }
            KeyCode::End => {
                self.select(self.count.saturating_sub(1));
                self.scroll.scroll_to_bottom();
                Handled::Yes
            }
            KeyCode::PageUp => {
                self.scroll.page_up();
                Handled::Yes
            }
            KeyCode::PageDown => {
                self.scroll.page_down();
                Handled::Yes
            }
            KeyCode::Esc if self.selected.is_some() => {
                self.selected = None;
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  Enter:details  y:copy  Y:copy JSON")
    }
}
