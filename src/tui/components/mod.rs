// Components module - UI building blocks
//
// Interactive panels (category dropdown, fetch button, joke list, logs)
// implement Component + Interactive and own their own view state. Shell
// pieces (title bar, status bar, toast) are plain render functions.

pub mod category_select;
pub mod fetch_button;
pub mod joke_list;
pub mod logs_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use category_select::CategorySelect;
pub use fetch_button::FetchButton;
pub use joke_list::JokeList;
pub use logs_panel::LogsPanel;
pub use status_bar::StatusLine;
pub use toast::Toast;
