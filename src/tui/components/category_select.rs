//! Category dropdown
//!
//! Closed: shows the selected category. Open: lists every category with a
//! highlight; Enter commits, Esc cancels. A committed choice is picked up by
//! the App through `take_committed()` and applied to the page.

use crate::models::Category;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub struct CategorySelect {
    /// Category currently applied to the page
    current: Category,
    /// Dropdown list is open
    open: bool,
    /// Highlighted option while open
    highlighted: Category,
    /// Choice waiting to be applied by the App
    committed: Option<Category>,
}

impl CategorySelect {
    pub fn new(current: Category) -> Self {
        Self {
            current,
            open: false,
            highlighted: current,
            committed: None,
        }
    }

    /// Sync with the page's category (call before rendering)
    pub fn sync(&mut self, current: Category) {
        self.current = current;
        if !self.open {
            self.highlighted = current;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Take the committed choice, if any
    pub fn take_committed(&mut self) -> Option<Category> {
        self.committed.take()
    }

    fn open(&mut self) {
        self.open = true;
        self.highlighted = self.current;
    }

    fn commit(&mut self) {
        self.open = false;
        self.current = self.highlighted;
        self.committed = Some(self.highlighted);
    }

    /// Width needed to show the longest label plus borders and arrow
    pub fn preferred_width() -> u16 {
        let longest = Category::all()
            .iter()
            .map(|c| c.label().width())
            .max()
            .unwrap_or(0);
        longest as u16 + 6
    }

    /// Render the open option list below `anchor` (drawn on top of the page)
    pub fn render_overlay(&self, f: &mut Frame, anchor: Rect, ctx: &RenderContext) {
        if !self.open {
            return;
        }

        let height = Category::all().len() as u16 + 2;
        let area = Rect::new(
            anchor.x,
            anchor.bottom(),
            anchor.width,
            height.min(f.area().bottom().saturating_sub(anchor.bottom())),
        );

        let items: Vec<ListItem> = Category::all()
            .iter()
            .map(|category| {
                let style = if *category == self.highlighted {
                    Style::default()
                        .fg(ctx.theme.selection_fg)
                        .bg(ctx.theme.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(ctx.theme.foreground)
                };
                ListItem::new(format!(" {}", category.label())).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ctx.theme.border_type)
                .border_style(Style::default().fg(ctx.theme.highlight)),
        );

        f.render_widget(Clear, area);
        f.render_widget(list, area);
    }
}

impl Component for CategorySelect {
    fn id(&self) -> ComponentId {
        ComponentId::CategorySelect
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let arrow = if self.open { "▴" } else { "▾" };
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.current.label()),
                Style::default().fg(ctx.theme.foreground),
            ),
            Span::styled(arrow, Style::default().fg(ctx.theme.muted)),
        ]);

        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ctx.theme.border_type)
                .border_style(Style::default().fg(ctx.border_color(self.id())))
                .title(" Category "),
        );

        f.render_widget(widget, area);
    }
}

impl Interactive for CategorySelect {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if self.open {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.highlighted = self.highlighted.prev();
                    Handled::Yes
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.highlighted = self.highlighted.next();
                    Handled::Yes
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.commit();
                    Handled::Yes
                }
                KeyCode::Esc => {
                    self.open = false;
                    self.highlighted = self.current;
                    Handled::Yes
                }
                _ => Handled::No,
            }
        } else {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down | KeyCode::Char('j') => {
                    self.open();
                    Handled::Yes
                }
                _ => Handled::No,
            }
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        if self.open {
            Some("↑↓:choose  Enter:select  Esc:cancel")
        } else {
            Some("Enter:open  c:cycle category")
        }
    }
}
