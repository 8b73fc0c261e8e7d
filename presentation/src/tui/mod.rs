//! TUI (Text User Interface) for the tokenizer console
//!
//! A single input line, a mode indicator and a token pane, driven by the
//! application's `InputController` from a ratatui/crossterm event loop.

mod app;
mod keymap;
mod state;
mod widgets;

pub use app::TuiApp;
pub use keymap::{KeyAction, handle_key_event};
pub use state::{DisplayRow, TuiOptions, TuiState};
pub use widgets::{
    MainLayout, header::HeaderWidget, help::HelpWidget, input::InputWidget,
    status_bar::StatusBarWidget, token_list::TokenListWidget,
};
