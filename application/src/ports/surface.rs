//! UI surface ports consumed by the input controller.
//!
//! The controller never owns UI state. It reads the query from an
//! [`InputSurface`] at the moment of dispatch and writes results to a
//! [`DisplaySurface`]; failures are reported to a [`StatusSink`].
//! [`ConsoleView`] bundles the three so a single view (e.g. the TUI state)
//! can be passed through one `&mut` borrow.

use crate::ports::tokenizer_gateway::GatewayError;
use tokenscope_domain::{AnalysisMode, ResultSet};

/// Output area that shows token rows
pub trait DisplaySurface {
    /// Remove every displayed row. Must be idempotent.
    fn clear(&mut self);

    /// Append one display line per row, in order.
    ///
    /// Implementations apply [`tokenscope_domain::display_surface`] to each
    /// surface and show `features` verbatim. Callers clear first.
    fn render(&mut self, rows: &ResultSet);
}

/// Text input field plus the mode indicator next to it
pub trait InputSurface {
    /// Current raw query text
    fn text(&self) -> String;

    /// Empty the input field
    fn clear_text(&mut self);

    /// Give keyboard focus to the input field
    fn focus(&mut self);

    /// Update the mode indicator
    fn set_mode_label(&mut self, mode: AnalysisMode);
}

/// Receives non-row notifications (status line, flash messages)
pub trait StatusSink {
    fn report_failure(&mut self, error: &GatewayError);
}

/// Everything the controller drives, reachable through one borrow.
pub trait ConsoleView: InputSurface + DisplaySurface + StatusSink {}

impl<T: InputSurface + DisplaySurface + StatusSink + ?Sized> ConsoleView for T {}
