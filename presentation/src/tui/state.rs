//! TUI application state
//!
//! Single source of truth for everything the TUI renders. The input
//! controller drives it through the `InputSurface`, `DisplaySurface` and
//! `StatusSink` ports; key editing goes through the methods below.

use std::time::{Duration, Instant};
use tokenscope_application::{DisplaySurface, GatewayError, InputSurface, StatusSink};
use tokenscope_domain::{AnalysisMode, ResultSet, display_surface};

/// One rendered line of the token pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Surface after whitespace substitution
    pub surface: String,
    pub features: String,
}

/// Presentation options that do not change at runtime
#[derive(Debug, Clone, Default)]
pub struct TuiOptions {
    /// Prefix each token row with its position
    pub show_index: bool,
    /// Shown in the header, e.g. `get http://localhost:8080/...`
    pub endpoint: String,
}

/// Central TUI state, owned by the TuiApp select! loop
pub struct TuiState {
    // -- Input line --
    pub input: String,
    pub cursor_pos: usize,
    pub input_focused: bool,

    // -- Mode indicator --
    pub mode: AnalysisMode,

    // -- Token pane --
    pub rows: Vec<DisplayRow>,
    pub scroll_offset: usize,

    // -- Request indicator --
    pub pending: bool,

    // -- Overlay --
    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,

    pub options: TuiOptions,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new(TuiOptions::default())
    }
}

impl TuiState {
    pub fn new(options: TuiOptions) -> Self {
        Self {
            input: String::new(),
            cursor_pos: 0,
            input_focused: false,
            mode: AnalysisMode::default(),
            rows: Vec::new(),
            scroll_offset: 0,
            pending: false,
            show_help: false,
            flash_message: None,
            options,
            should_quit: false,
        }
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if let Some(prev) = self.input[..self.cursor_pos].chars().next_back() {
            self.cursor_pos -= prev.len_utf8();
            self.input.remove(self.cursor_pos);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor_pos < self.input.len() {
            self.input.remove(self.cursor_pos);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(prev) = self.input[..self.cursor_pos].chars().next_back() {
            self.cursor_pos -= prev.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(next) = self.input[self.cursor_pos..].chars().next() {
            self.cursor_pos += next.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    // -- Scrolling (offset counted from the first row) --

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.rows.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + lines).min(max);
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}

impl InputSurface for TuiState {
    fn text(&self) -> String {
        self.input.clone()
    }

    fn clear_text(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    fn focus(&mut self) {
        self.input_focused = true;
    }

    fn set_mode_label(&mut self, mode: AnalysisMode) {
        self.mode = mode;
    }
}

impl DisplaySurface for TuiState {
    fn clear(&mut self) {
        self.rows.clear();
        self.scroll_offset = 0;
    }

    fn render(&mut self, rows: &ResultSet) {
        self.rows.extend(rows.iter().map(|row| DisplayRow {
            surface: display_surface(&row.surface).to_string(),
            features: row.features.clone(),
        }));
    }
}

impl StatusSink for TuiState {
    fn report_failure(&mut self, error: &GatewayError) {
        self.set_flash(format!("Request failed: {}", error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenscope_domain::{SPACE_PLACEHOLDER, TokenRow};

    fn sample_rows(n: usize) -> ResultSet {
        (0..n)
            .map(|i| TokenRow::new(format!("t{}", i), "名詞"))
            .collect()
    }

    #[test]
    fn test_input_editing() {
        let mut state = TuiState::default();
        for c in "すもも".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.input, "すもも");
        assert_eq!(state.cursor_pos, "すもも".len());

        state.delete_char();
        assert_eq!(state.input, "すも");

        state.cursor_home();
        state.delete_forward();
        assert_eq!(state.input, "も");
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn test_cursor_movement() {
        let mut state = TuiState::default();
        for c in "aす".chars() {
            state.insert_char(c);
        }
        state.cursor_left();
        assert_eq!(state.cursor_pos, 1);
        state.cursor_left();
        assert_eq!(state.cursor_pos, 0);
        // Stays at 0
        state.cursor_left();
        assert_eq!(state.cursor_pos, 0);
        state.cursor_end();
        assert_eq!(state.cursor_pos, 4);
        state.cursor_right();
        assert_eq!(state.cursor_pos, 4);
    }

    #[test]
    fn test_render_appends_with_placeholder() {
        let mut state = TuiState::default();
        let rows: ResultSet = vec![
            TokenRow::new("a", "x"),
            TokenRow::new(" ", "記号,空白"),
            TokenRow::new("\u{3000}", "記号,空白"),
            TokenRow::new("  ", "two spaces"),
        ]
        .into();

        state.render(&rows);

        let surfaces: Vec<_> = state.rows.iter().map(|r| r.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["a", SPACE_PLACEHOLDER, SPACE_PLACEHOLDER, "  "]);
        assert_eq!(state.rows[1].features, "記号,空白");
    }

    #[test]
    fn test_render_empty_result_set() {
        let mut state = TuiState::default();
        state.render(&ResultSet::empty());
        assert!(state.rows.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut state = TuiState::default();
        state.render(&sample_rows(3));
        state.scroll_down(2);

        state.clear();
        assert!(state.rows.is_empty());
        assert_eq!(state.scroll_offset, 0);

        state.clear();
        assert!(state.rows.is_empty());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = TuiState::default();
        state.render(&sample_rows(5));
        state.scroll_down(10);
        assert_eq!(state.scroll_offset, 4);
        state.scroll_up(3);
        assert_eq!(state.scroll_offset, 1);
        state.scroll_up(3);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_input_surface() {
        let mut state = TuiState::default();
        state.insert_char('x');
        assert_eq!(state.text(), "x");
        state.clear_text();
        assert_eq!(state.text(), "");
        assert_eq!(state.cursor_pos, 0);

        assert!(!state.input_focused);
        state.focus();
        assert!(state.input_focused);

        state.set_mode_label(AnalysisMode::Extended);
        assert_eq!(state.mode.label(), "extended search mode");
    }

    #[test]
    fn test_failure_sets_flash() {
        let mut state = TuiState::default();
        state.report_failure(&GatewayError::Timeout);
        let (msg, _) = state.flash_message.as_ref().unwrap();
        assert_eq!(msg, "Request failed: Request timed out");

        state.expire_flash(Duration::from_secs(60));
        assert!(state.flash_message.is_some());
        let old = Instant::now().checked_sub(Duration::from_secs(10)).unwrap();
        state.flash_message = Some(("old".to_string(), old));
        state.expire_flash(Duration::from_secs(5));
        assert!(state.flash_message.is_none());
    }
}
