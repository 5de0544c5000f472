// TUI module - Terminal User Interface
//
// Sets up the terminal, runs the event loop and restores the terminal on
// exit. The loop multiplexes keyboard input, a redraw tick and page events
// from fetch tasks; all App mutation happens here, one event at a time.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod modal;
pub mod page;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::services::ServiceLocator;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use page::PageEvent;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use traits::{ComponentId, Handled};

/// Capacity of the channel between fetch tasks and the event loop
const PAGE_CHANNEL_CAPACITY: usize = 32;

/// Run the TUI until the user quits
pub async fn run_tui(config: Config, log_buffer: LogBuffer, locator: ServiceLocator) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (page_tx, mut page_rx) = mpsc::channel(PAGE_CHANNEL_CAPACITY);
    let mut app = App::new(&config, log_buffer, locator, page_tx);

    let result = run_event_loop(&mut terminal, &mut app, &mut page_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on whichever comes first: a key, the redraw tick or a page event
/// from a fetch task. Redraws after each.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    page_rx: &mut mpsc::Receiver<PageEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(page_event) = page_rx.recv() => {
                app.apply(page_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Layered key dispatch: modal → open dropdown → global → focused component
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if handle_modal_input(app, key_event.code) {
        return;
    }

    // An open dropdown captures everything so letters don't trigger globals
    if app.focused == ComponentId::CategorySelect && app.category_select.is_open() {
        app.dispatch_to_focused(key_event);
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    if app.dispatch_to_focused(key_event) == Handled::Yes {
        return;
    }

    // Keys the focused component left alone
    match key_event.code {
        KeyCode::Enter if app.focused == ComponentId::JokeList => app.open_detail(),
        KeyCode::Esc => {
            app.dismiss_error();
        }
        _ => {}
    }
}

/// Returns true if a modal absorbed the key
fn handle_modal_input(app: &mut App, key: KeyCode) -> bool {
    let Some(modal) = app.modal else {
        return false;
    };

    match modal.handle_input(key) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::CopyText => {
            let text = app.copy_current_text();
            app.copy_with_toast(text, "to clipboard");
        }
        ModalAction::CopyJson => {
            let json = app.copy_current_json();
            app.copy_with_toast(json, "JSON to clipboard");
        }
    }

    true
}

/// Keys that work regardless of focus; returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        KeyCode::Char('?') => app.modal = Some(Modal::Help),
        KeyCode::Tab if key_event.modifiers.contains(KeyModifiers::SHIFT) => app.focus_prev(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Char('c') => app.cycle_category(),
        KeyCode::Char('f') | KeyCode::Char('r') => app.request_fetch(),
        KeyCode::Char('l') => app.toggle_logs(),
        KeyCode::Char('y') => {
            let text = app.copy_current_text();
            app.copy_with_toast(text, "to clipboard");
        }
        KeyCode::Char('Y') => {
            let json = app.copy_current_json();
            app.copy_with_toast(json, "JSON to clipboard");
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::config::ApiConfig;
    use crate::message::MessageContext;
    use crate::models::Category;
    use crate::services::test_support::MockJokeApi;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app_for(base_url: &str) -> (App, mpsc::Receiver<PageEvent>) {
        let api = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        let locator =
            ServiceLocator::new(ApiClient::new(&api).unwrap(), MessageContext::provider());
        let (tx, rx) = mpsc::channel(PAGE_CHANNEL_CAPACITY);
        (App::new(&Config::default(), LogBuffer::new(), locator, tx), rx)
    }

    #[test]
    fn test_quit_and_help() {
        let (mut app, _rx) = app_for("http://127.0.0.1:9");

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modal, Some(Modal::Help));

        // Modal swallows q
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modal, None);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_open_dropdown_captures_letters() {
        let (mut app, _rx) = app_for("http://127.0.0.1:9");

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('l'));
        assert!(!app.should_quit);
        assert!(!app.show_logs);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.page.category(), Category::General);
        assert!(!app.page.is_loading());
    }

    #[test]
    fn test_tab_cycles_focus() {
        let (mut app, _rx) = app_for("http://127.0.0.1:9");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused, ComponentId::FetchButton);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused, ComponentId::CategorySelect);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.page.category(), Category::General);
    }

    #[tokio::test]
    async fn test_fetch_key_then_detail() {
        let api = MockJokeApi::spawn().await;
        let (mut app, mut rx) = app_for(&api.base_url);

        press(&mut app, KeyCode::Char('f'));
        while app.page.is_loading() {
            let event = rx.recv().await.unwrap();
            app.apply(event);
        }
        assert_eq!(api.hits(), vec!["/jokes/programming/ten".to_string()]);

        app.focused = ComponentId::JokeList;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modal, Some(Modal::JokeDetail(0)));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modal, None);
    }
}
