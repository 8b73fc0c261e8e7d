//! Presentation layer for tokenscope
//!
//! This crate contains the CLI definition, the interactive TUI console,
//! the one-shot console renderer and the progress spinner.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleRenderer;
pub use progress::spinner::RequestSpinner;
pub use tui::{TuiApp, TuiOptions, TuiState};
