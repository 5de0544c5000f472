//! Logs panel component
//!
//! Displays captured tracing output. Follows new entries until the user
//! scrolls or selects; Esc returns to follow mode.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::logging::{LogEntry, LogLevel};
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    /// Scroll state (position, viewport, auto-follow)
    scroll: ScrollState,

    /// Selected log entry index (None = auto-follow mode)
    pub selected: Option<usize>,

    /// Cached entry count for bounds checking
    entry_count: usize,
}

impl LogsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::following(),
            selected: None,
            entry_count: 0,
        }
    }

    /// Sync with the log buffer (call each frame before rendering)
    ///
    /// The buffer is shared with the tracing layer, so the panel only caches
    /// its size.
    pub fn sync_entries(&mut self, count: usize, viewport_height: usize) {
        self.entry_count = count;
        self.scroll.update_dimensions(count, viewport_height);

        if let Some(idx) = self.selected {
            if idx >= count {
                self.selected = count.checked_sub(1);
            }
        }
    }

    /// Text of the selected entry with its target (for clipboard)
    pub fn selected_entry_text(&self, entries: &[LogEntry]) -> Option<String> {
        self.selected
            .and_then(|idx| entries.get(idx))
            .map(|entry| format!("{} ({})", entry.format_line(), entry.target))
    }

    fn select_next(&mut self) {
        match self.selected {
            Some(idx) if idx + 1 < self.entry_count => {
                self.selected = Some(idx + 1);
                self.scroll.ensure_visible(idx + 1);
            }
            // First selection starts at the most recent entry
            None if self.entry_count > 0 => self.selected = Some(self.entry_count - 1),
            _ => {}
        }
    }

    fn select_previous(&mut self) {
        match self.selected {
            Some(idx) if idx > 0 => {
                self.selected = Some(idx - 1);
                self.scroll.auto_follow = false;
                self.scroll.ensure_visible(idx - 1);
            }
            None if self.entry_count > 0 => self.selected = Some(self.entry_count - 1),
            _ => {}
        }
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let (start, end) = self.scroll.visible_range();

        let items: Vec<ListItem> = ctx
            .logs
            .iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
            .map(|(idx, entry)| {
                let style = if focused && self.selected == Some(idx) {
                    Style::default()
                        .fg(ctx.theme.selection_fg)
                        .bg(ctx.theme.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    log_level_style(entry.level, ctx.theme)
                };
                ListItem::new(entry.format_line()).style(style)
            })
            .collect();

        let title = if focused && self.selected.is_some() {
            " System Logs [select] "
        } else if self.scroll.auto_follow {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ctx.theme.border_type)
                .border_style(Style::default().fg(ctx.border_color(self.id())))
                .title(title),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Minimal);
    }
}

impl Interactive for LogsPanel {
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
                self.scroll.scroll_to_top();
                if self.entry_count > 0 {
                    self.selected = Some(0);
                }
                Handled::Yes
            }
            KeyCode::End => {
                self.scroll.scroll_to_bottom();
                self.selected = self.entry_count.checked_sub(1);
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
            KeyCode::Esc => {
                if self.selected.is_some() {
                    self.selected = None;
                    self.scroll.auto_follow = true;
                    Handled::Yes
                } else {
                    Handled::No
                }
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  y:copy  Esc:follow")
    }
}

fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.log_warn),
        LogLevel::Info => Style::default().fg(theme.log_info),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.log_debug),
    }
}
