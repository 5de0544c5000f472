// TUI application state
//
// App owns the page state and every component. It is mutated only by the
// event loop; fetches run on spawned tasks and report back through the page
// channel, which the loop drains into `App::apply`.

use super::clipboard;
use super::components::{CategorySelect, FetchButton, JokeList, LogsPanel, Toast};
use super::modal::Modal;
use super::page::{run_fetch, JokePage, PageEvent};
use super::theme::Theme;
use super::traits::{ComponentId, Handled, Interactive};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::models::Joke;
use crate::services::{JokeService, ServiceLocator};
use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

/// Main application state for the TUI
pub struct App {
    pub page: JokePage,

    pub category_select: CategorySelect,
    pub fetch_button: FetchButton,
    pub joke_list: JokeList,
    pub logs_panel: LogsPanel,

    /// Component receiving keys that the App does not handle itself
    pub focused: ComponentId,

    pub show_logs: bool,

    /// Show the error channel's message in the status bar
    pub show_errors: bool,

    /// Active modal overlay (None = no modal)
    pub modal: Option<Modal>,

    /// Active toast notification (auto-dismisses)
    pub toast: Option<Toast>,

    /// Animation frame counter for spinners
    pub animation_frame: usize,

    pub should_quit: bool,

    /// Captured tracing output for the logs panel
    pub log_buffer: LogBuffer,

    pub theme: Theme,

    locator: ServiceLocator,

    /// Sender handed to each fetch task
    page_tx: mpsc::Sender<PageEvent>,
}

impl App {
    pub fn new(
        config: &Config,
        log_buffer: LogBuffer,
        locator: ServiceLocator,
        page_tx: mpsc::Sender<PageEvent>,
    ) -> Self {
        let category = config.ui.default_category;
        Self {
            page: JokePage::new(category),
            category_select: CategorySelect::new(category),
            fetch_button: FetchButton::new(),
            joke_list: JokeList::new(),
            logs_panel: LogsPanel::new(),
            focused: ComponentId::default(),
            show_logs: config.ui.show_logs,
            show_errors: config.ui.show_errors,
            modal: None,
            toast: None,
            animation_frame: 0,
            should_quit: false,
            log_buffer,
            theme: Theme::default(),
            locator,
            page_tx,
        }
    }

    /// Advance spinners and expire the toast (called on every tick)
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next_focus(self.show_logs);
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev_focus(self.show_logs);
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if !self.show_logs && self.focused == ComponentId::Logs {
            self.focused = ComponentId::JokeList;
        }
    }

    pub fn cycle_category(&mut self) {
        self.page.cycle_category();
        self.category_select.sync(self.page.category());
        tracing::debug!("Category: {}", self.page.category());
    }

    /// Button press: fetch the current category on a new task
    pub fn request_fetch(&mut self) {
        let category = self.page.begin_fetch();
        let service: JokeService = self.locator.service();
        tracing::info!("Fetching {} jokes", category);
        tokio::spawn(run_fetch(service, category, self.page_tx.clone()));
    }

    /// Apply a message from a fetch task
    pub fn apply(&mut self, event: PageEvent) {
        if matches!(event, PageEvent::Loaded(_)) {
            self.joke_list.reset();
            // The detail modal points into the list being replaced
            if self.modal.and_then(|m| m.joke_index()).is_some() {
                self.modal = None;
            }
        }
        self.page.apply(event);
    }

    /// Route a key to the focused component, then act on what it recorded
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        let handled = match self.focused {
            ComponentId::CategorySelect => self.category_select.handle_key(key),
            ComponentId::FetchButton => self.fetch_button.handle_key(key),
            ComponentId::JokeList => self.joke_list.handle_key(key),
            ComponentId::Logs => self.logs_panel.handle_key(key),
        };

        if let Some(category) = self.category_select.take_committed() {
            self.page.select_category(category);
            tracing::debug!("Category: {}", category);
        }
        if self.fetch_button.take_pressed() {
            self.request_fetch();
        }

        handled
    }

    /// Hint for the status bar from the focused component
    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focused {
            ComponentId::CategorySelect => self.category_select.focus_hint(),
            ComponentId::FetchButton => self.fetch_button.focus_hint(),
            ComponentId::JokeList => self.joke_list.focus_hint(),
            ComponentId::Logs => self.logs_panel.focus_hint(),
        }
    }

    /// Latest error message, or empty when error display is off
    pub fn error_message(&self) -> String {
        if self.show_errors {
            self.locator.context().message()
        } else {
            String::new()
        }
    }

    /// Clear the error channel
    pub fn dismiss_error(&mut self) -> bool {
        let context = self.locator.context();
        !context.message().is_empty() && context.clear()
    }

    /// Open the detail modal for the selected joke (or the first one)
    pub fn open_detail(&mut self) {
        let idx = self
            .joke_list
            .selected
            .or_else(|| (!self.page.jokes().is_empty()).then_some(0));
        if let Some(idx) = idx {
            self.modal = Some(Modal::JokeDetail(idx));
        }
    }

    /// Joke the clipboard keys act on: the open detail modal's, else the
    /// list selection
    fn current_joke(&self) -> Option<&Joke> {
        match self.modal.and_then(|m| m.joke_index()) {
            Some(idx) => self.page.jokes().get(idx),
            None if self.focused == ComponentId::JokeList => {
                self.joke_list.selected_joke(self.page.jokes())
            }
            None => None,
        }
    }

    /// Readable text for `y`
    pub fn copy_current_text(&self) -> Option<String> {
        if self.modal.is_none() && self.focused == ComponentId::Logs {
            return self
                .logs_panel
                .selected_entry_text(&self.log_buffer.get_all());
        }
        self.current_joke().map(Joke::to_text)
    }

    /// JSON for `Y`
    pub fn copy_current_json(&self) -> Option<String> {
        self.current_joke()
            .and_then(|joke| serde_json::to_string(joke).ok())
    }

    /// Copy to the system clipboard and report through a toast
    pub fn copy_with_toast(&mut self, text: Option<String>, what: &str) {
        let Some(text) = text else {
            self.show_toast("Nothing selected");
            return;
        };
        match clipboard::copy_to_clipboard(&text) {
            Ok(()) => self.show_toast(format!("✓ Copied {}", what)),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::config::ApiConfig;
    use crate::message::MessageContext;
    use crate::models::Category;
    use crate::services::test_support::{refused_base_url, MockJokeApi};
    use crate::services::JOKE_ERROR;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_for(base_url: &str, config: Config) -> (App, mpsc::Receiver<PageEvent>) {
        let api = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&api).unwrap();
        let locator = ServiceLocator::new(client, MessageContext::provider());
        let (tx, rx) = mpsc::channel(16);
        (App::new(&config, LogBuffer::new(), locator, tx), rx)
    }

    /// Drain page events until every fetch in flight has finished
    async fn settle(app: &mut App, rx: &mut mpsc::Receiver<PageEvent>) {
        while app.page.is_loading() {
            let event = rx.recv().await.expect("fetch task reports back");
            app.apply(event);
        }
    }

    #[test]
    fn test_focus_skips_hidden_logs() {
        let (mut app, _rx) = app_for("http://127.0.0.1:9", Config::default());
        assert_eq!(app.focused, ComponentId::CategorySelect);

        app.focus_next();
        app.focus_next();
        app.focus_next();
        assert_eq!(app.focused, ComponentId::CategorySelect);

        app.toggle_logs();
        app.focus_prev();
        assert_eq!(app.focused, ComponentId::Logs);

        app.toggle_logs();
        assert_eq!(app.focused, ComponentId::JokeList);
    }

    #[test]
    fn test_dropdown_commit_changes_category_only() {
        let (mut app, _rx) = app_for("http://127.0.0.1:9", Config::default());

        app.dispatch_to_focused(key(KeyCode::Enter));
        app.dispatch_to_focused(key(KeyCode::Down));
        app.dispatch_to_focused(key(KeyCode::Enter));

        assert_eq!(app.page.category(), Category::General);
        assert!(!app.page.is_loading());
        assert!(app.page.jokes().is_empty());
    }

    #[tokio::test]
    async fn test_button_fetches_selected_category() {
        let api = MockJokeApi::spawn().await;
        let (mut app, mut rx) = app_for(&api.base_url, Config::default());

        app.cycle_category();
        app.focus_next();
        assert_eq!(app.dispatch_to_focused(key(KeyCode::Enter)), Handled::Yes);
        assert!(app.page.is_loading());
        settle(&mut app, &mut rx).await;

        assert_eq!(api.hits(), vec!["/jokes/general/ten".to_string()]);
        assert_eq!(app.page.jokes(), api.jokes_for("general").as_slice());
        assert!(app.error_message().is_empty());
    }

    #[tokio::test]
    async fn test_failure_shows_error_and_keeps_list() {
        let (mut app, mut rx) = app_for(&refused_base_url().await, Config::default());
        let earlier = vec![Joke {
            id: 7,
            setup: "S7".to_string(),
            punchline: "P7".to_string(),
        }];
        app.apply(PageEvent::Loaded(earlier.clone()));

        app.request_fetch();
        settle(&mut app, &mut rx).await;

        assert_eq!(app.page.jokes(), earlier.as_slice());
        assert_eq!(app.error_message(), JOKE_ERROR);
        assert!(app.dismiss_error());
        assert!(app.error_message().is_empty());
    }

    #[tokio::test]
    async fn test_errors_hidden_when_disabled() {
        let mut config = Config::default();
        config.ui.show_errors = false;
        let (mut app, mut rx) = app_for(&refused_base_url().await, config);

        app.request_fetch();
        settle(&mut app, &mut rx).await;

        assert!(app.error_message().is_empty());
        assert_eq!(app.locator.context().message(), JOKE_ERROR);
    }

    #[tokio::test]
    async fn test_detail_and_copy_targets() {
        let api = MockJokeApi::spawn().await;
        let (mut app, mut rx) = app_for(&api.base_url, Config::default());
        app.request_fetch();
        settle(&mut app, &mut rx).await;

        app.focused = ComponentId::JokeList;
        app.joke_list.sync(app.page.jokes().len(), 10);
        assert_eq!(app.copy_current_text(), None);

        app.dispatch_to_focused(key(KeyCode::Down));
        app.dispatch_to_focused(key(KeyCode::Down));
        let second = app.page.jokes()[1].clone();
        assert_eq!(app.copy_current_text(), Some(second.to_text()));

        app.open_detail();
        assert_eq!(app.modal, Some(Modal::JokeDetail(1)));
        let json = app.copy_current_json().unwrap();
        let parsed: Joke = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, second);

        // A new list closes the detail modal and clears the selection
        app.apply(PageEvent::Loaded(vec![second.clone()]));
        assert_eq!(app.modal, None);
        assert_eq!(app.joke_list.selected, None);
    }
}
