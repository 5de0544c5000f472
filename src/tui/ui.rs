// Frame rendering
//
// Syncs component view state with the current data, then draws top to
// bottom: title, controls row (dropdown + button), joke list, optional logs,
// status bar. Overlays (open dropdown, modal, toast) are drawn last.

use super::app::App;
use super::components::{status_bar, title_bar, CategorySelect, StatusLine};
use super::traits::{Component, RenderContext};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Height of the logs panel when visible (including borders)
const LOGS_HEIGHT: u16 = 8;

/// Render one frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let mut constraints = vec![
        Constraint::Length(3), // Title bar
        Constraint::Length(3), // Controls
        Constraint::Min(3),    // Joke list
    ];
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(2)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let (title_area, controls_area, list_area) = (chunks[0], chunks[1], chunks[2]);
    let logs_area = app.show_logs.then(|| chunks[3]);
    let status_area = chunks[chunks.len() - 1];

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CategorySelect::preferred_width().max(16)),
            Constraint::Length(1),
            Constraint::Min(10),
        ])
        .split(controls_area);
    let (select_area, button_area) = (controls[0], controls[2]);

    // Sync view state before borrowing the app immutably for rendering
    let logs = app.log_buffer.get_all();
    app.category_select.sync(app.page.category());
    app.joke_list
        .sync(app.page.jokes().len(), list_area.height.saturating_sub(2) as usize);
    if let Some(area) = logs_area {
        app.logs_panel
            .sync_entries(logs.len(), area.height.saturating_sub(2) as usize);
    }

    let app = &*app;
    let ctx = RenderContext {
        theme: &app.theme,
        focus: app.focused,
        animation_frame: app.animation_frame,
        page: &app.page,
        logs: &logs,
    };

    title_bar::render(f, title_area, &ctx);
    app.category_select.render(f, select_area, &ctx);
    app.fetch_button.render(f, button_area, &ctx);
    app.joke_list.render(f, list_area, &ctx);
    if let Some(area) = logs_area {
        app.logs_panel.render(f, area, &ctx);
    }

    let error = app.error_message();
    status_bar::render(
        f,
        status_area,
        &ctx,
        StatusLine {
            error: &error,
            hint: app.focus_hint(),
        },
    );

    app.category_select.render_overlay(f, select_area, &ctx);
    if let Some(modal) = &app.modal {
        modal.render(f, app.page.jokes(), &app.theme);
    }
    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::config::{ApiConfig, Config};
    use crate::logging::LogBuffer;
    use crate::message::MessageContext;
    use crate::models::Joke;
    use crate::services::{ServiceLocator, JOKE_ERROR};
    use crate::tui::page::PageEvent;
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    fn make_app(config: &Config) -> (App, MessageContext) {
        let client = ApiClient::new(&ApiConfig::default()).unwrap();
        let context = MessageContext::provider();
        let locator = ServiceLocator::new(client, context.clone());
        let (tx, _rx) = mpsc::channel(1);
        (App::new(config, LogBuffer::new(), locator, tx), context)
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_initial_screen() {
        let (mut app, _) = make_app(&Config::default());
        let screen = screen(&mut app);

        assert!(screen.contains("jokebox"));
        assert!(screen.contains("Programming"));
        assert!(screen.contains("Generate Random Jokes"));
        assert!(screen.contains("Jokes (0)"));
        assert!(!screen.contains("System Logs"));
    }

    #[test]
    fn test_loaded_jokes_render_punchline_first() {
        let (mut app, _) = make_app(&Config::default());
        app.apply(PageEvent::Loaded(vec![Joke {
            id: 1,
            setup: "S1".to_string(),
            punchline: "P1".to_string(),
        }]));

        let screen = screen(&mut app);
        let row = screen.lines().find(|l| l.contains("P1")).unwrap();
        assert!(row.find("P1").unwrap() < row.find("S1").unwrap());
    }

    #[test]
    fn test_error_message_in_status_bar() {
        let (mut app, context) = make_app(&Config::default());
        context.set_message(JOKE_ERROR);
        assert!(screen(&mut app).contains(JOKE_ERROR));

        let mut quiet = Config::default();
        quiet.ui.show_errors = false;
        let (mut app, context) = make_app(&quiet);
        context.set_message(JOKE_ERROR);
        assert!(!screen(&mut app).contains(JOKE_ERROR));
    }

    #[test]
    fn test_logs_panel_toggle() {
        let (mut app, _) = make_app(&Config::default());
        app.toggle_logs();
        assert!(screen(&mut app).contains("System Logs"));
    }
}
