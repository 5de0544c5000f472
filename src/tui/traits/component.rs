//! Core component trait

use crate::logging::LogEntry;
use crate::tui::page::JokePage;
use crate::tui::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Identifier for focus tracking and routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentId {
    /// Category dropdown (default focus)
    #[default]
    CategorySelect,
    /// "Generate Random Jokes" button
    FetchButton,
    /// Joke list
    JokeList,
    /// System logs panel (focusable only while visible)
    Logs,
}

impl ComponentId {
    /// Cycle to next focusable component (Tab behavior)
    pub fn next_focus(self, logs_visible: bool) -> Self {
        match self {
            Self::CategorySelect => Self::FetchButton,
            Self::FetchButton => Self::JokeList,
            Self::JokeList if logs_visible => Self::Logs,
            Self::JokeList | Self::Logs => Self::CategorySelect,
        }
    }

    /// Cycle to previous focusable component (Shift+Tab behavior)
    pub fn prev_focus(self, logs_visible: bool) -> Self {
        match self {
            Self::CategorySelect if logs_visible => Self::Logs,
            Self::CategorySelect => Self::JokeList,
            Self::FetchButton => Self::CategorySelect,
            Self::JokeList => Self::FetchButton,
            Self::Logs => Self::JokeList,
        }
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need; rendering has no access to
/// mutable app state.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Animation frame counter (spinner)
    pub animation_frame: usize,

    /// Page state (category, jokes, loading)
    pub page: &'a JokePage,

    /// Captured log entries
    pub logs: &'a [LogEntry],
}

impl RenderContext<'_> {
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }

    /// Spinner character for the current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Border color for a component given focus
    pub fn border_color(&self, id: ComponentId) -> ratatui::style::Color {
        if self.is_focused(id) {
            self.theme.highlight
        } else {
            self.theme.border
        }
    }
}

/// Base trait for all UI components
pub trait Component {
    fn id(&self) -> ComponentId;

    /// Render the component into `area`
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
