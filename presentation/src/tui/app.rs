//! TUI application: main loop
//!
//! ```text
//! TuiApp (select! loop)                  dispatch tasks (tokio::spawn)
//!   ├─ crossterm EventStream               └─ gateway.tokenize()
//!   ├─ completion_rx  <──────── Completion ───┘
//!   └─ tick_interval (flash expiry)
//! ```
//!
//! The loop owns the [`InputController`] and the [`TuiState`]; key presses
//! and completions are applied in turn, so no state is shared with the
//! dispatch tasks.

use super::keymap::{KeyAction, handle_key_event};
use super::state::{TuiOptions, TuiState};
use super::widgets::{
    MainLayout, header::HeaderWidget, help::HelpWidget, input::InputWidget,
    status_bar::StatusBarWidget, token_list::TokenListWidget,
};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokenscope_application::{
    CompletionReceiver, GatewayError, InputController, RequestDispatcher, TokenizerGateway,
};
use tokenscope_domain::Completion;

const FLASH_TTL: Duration = Duration::from_secs(5);
const DEFAULT_PAGE: usize = 10;

/// Main TUI application
pub struct TuiApp<G: TokenizerGateway + 'static> {
    controller: InputController<G>,
    completion_rx: CompletionReceiver,
    state: TuiState,
    /// Visible rows in the token pane, updated on every draw
    page_size: usize,
}

impl<G: TokenizerGateway + 'static> TuiApp<G> {
    /// Wire the controller to a fresh state and run the startup sequence
    pub fn new(
        dispatcher: RequestDispatcher<G>,
        completion_rx: CompletionReceiver,
        options: TuiOptions,
    ) -> Self {
        let mut state = TuiState::new(options);
        let mut controller = InputController::new(dispatcher);
        controller.bootstrap(&mut state);

        Self {
            controller,
            completion_rx,
            state,
            page_size: DEFAULT_PAGE,
        }
    }

    pub fn state(&self) -> &TuiState {
        &self.state
    }

    /// Run the TUI main loop until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        let result = loop {
            if let Err(e) = terminal.draw(|frame| self.render(frame)) {
                break Err(e);
            }

            if self.state.should_quit {
                break Ok(());
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(term_event);
                }

                // Completions from dispatch tasks
                Some(completion) = self.completion_rx.recv() => {
                    self.handle_completion(completion);
                }

                // Tick for flash expiry
                _ = tick.tick() => {
                    self.state.expire_flash(FLASH_TTL);
                }
            }
        };

        self.controller.shutdown();

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Render all widgets
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let layout = MainLayout::compute(frame.area());
        self.page_size = (layout.tokens.height.saturating_sub(2) as usize).max(1);

        frame.render_widget(HeaderWidget::new(&self.state), layout.header);
        frame.render_widget(InputWidget::new(&self.state), layout.input);
        frame.render_widget(TokenListWidget::new(&self.state), layout.tokens);
        frame.render_widget(StatusBarWidget::new(&self.state), layout.status_bar);

        if self.state.show_help {
            let help_area = MainLayout::centered_overlay(60, 60, frame.area());
            frame.render_widget(HelpWidget::new(), help_area);
        }
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(_, _) => {
                // Terminal auto-resizes on next draw
            }
            _ => {}
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // The help overlay is modal: Esc closes it, only F1 and quit pass
        if self.state.show_help && key.code == KeyCode::Esc {
            self.state.show_help = false;
            return;
        }

        let action = handle_key_event(key);
        if self.state.show_help && !matches!(action, KeyAction::ToggleHelp | KeyAction::Quit) {
            return;
        }
        self.handle_action(action);
    }

    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::None => {}

            // Text editing
            KeyAction::InsertChar(c) => self.state.insert_char(c),
            KeyAction::DeleteChar => self.state.delete_char(),
            KeyAction::DeleteForward => self.state.delete_forward(),
            KeyAction::CursorLeft => self.state.cursor_left(),
            KeyAction::CursorRight => self.state.cursor_right(),
            KeyAction::CursorHome => self.state.cursor_home(),
            KeyAction::CursorEnd => self.state.cursor_end(),

            // Console triggers
            KeyAction::Submit => {
                self.controller.submit(&mut self.state);
            }
            KeyAction::ClearInput => self.controller.clear_input(&mut self.state),
            KeyAction::CycleMode => {
                self.controller.cycle_mode(&mut self.state);
            }

            // Navigation
            KeyAction::ScrollUp => self.state.scroll_up(self.page_size),
            KeyAction::ScrollDown => self.state.scroll_down(self.page_size),

            KeyAction::ToggleHelp => self.state.show_help = !self.state.show_help,
            KeyAction::Quit => self.state.should_quit = true,
        }

        self.state.pending = self.controller.is_pending();
    }

    /// Apply a completion posted by a dispatch task
    pub fn handle_completion(&mut self, completion: Completion<GatewayError>) {
        self.controller.on_completion(completion, &mut self.state);
        self.state.pending = self.controller.is_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crossterm::event::KeyModifiers;
    use std::sync::Arc;
    use tokenscope_application::{DispatchParams, TokenizeRequest};
    use tokenscope_domain::{AnalysisMode, ResultSet, SPACE_PLACEHOLDER, TokenRow};

    /// One row per character, features carry the mode name
    struct CharGateway;

    #[async_trait]
    impl TokenizerGateway for CharGateway {
        async fn tokenize(&self, request: &TokenizeRequest) -> Result<ResultSet, GatewayError> {
            if request.text == "down" {
                return Err(GatewayError::Connection("refused".to_string()));
            }
            Ok(request
                .text
                .chars()
                .map(|c| TokenRow::new(c.to_string(), request.mode.name()))
                .collect())
        }
    }

    fn app() -> TuiApp<CharGateway> {
        let (dispatcher, rx) = RequestDispatcher::new(Arc::new(CharGateway), DispatchParams::default());
        TuiApp::new(dispatcher, rx, TuiOptions::default())
    }

    fn press(app: &mut TuiApp<CharGateway>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut TuiApp<CharGateway>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    async fn settle(app: &mut TuiApp<CharGateway>) {
        let completion = app.completion_rx.recv().await.unwrap();
        app.handle_completion(completion);
    }

    #[tokio::test]
    async fn test_startup_state() {
        let app = app();
        assert!(app.state().input_focused);
        assert_eq!(app.state().mode, AnalysisMode::Normal);
        assert!(app.state().rows.is_empty());
        assert!(!app.state().pending);
    }

    #[tokio::test]
    async fn test_enter_tokenizes_input() {
        let mut app = app();
        type_text(&mut app, "a b");
        press(&mut app, KeyCode::Enter);
        assert!(app.state().pending);

        settle(&mut app).await;

        let surfaces: Vec<_> = app.state().rows.iter().map(|r| r.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["a", SPACE_PLACEHOLDER, "b"]);
        assert!(!app.state().pending);
        // Input is kept after submit
        assert_eq!(app.state().input, "a b");
    }

    #[tokio::test]
    async fn test_tab_cycles_mode_and_retokenizes() {
        let mut app = app();
        type_text(&mut app, "xy");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().mode, AnalysisMode::Search);

        settle(&mut app).await;
        assert_eq!(app.state().rows.len(), 2);
        assert!(app.state().rows.iter().all(|r| r.features == "search"));
    }

    #[tokio::test]
    async fn test_escape_clears_everything() {
        let mut app = app();
        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;
        assert_eq!(app.state().rows.len(), 3);

        press(&mut app, KeyCode::Esc);
        assert!(app.state().input.is_empty());
        assert!(app.state().rows.is_empty());
        assert!(app.state().input_focused);
    }

    #[tokio::test]
    async fn test_failure_flashes_status() {
        let mut app = app();
        type_text(&mut app, "down");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        assert!(app.state().rows.is_empty());
        let (flash, _) = app.state().flash_message.as_ref().unwrap();
        assert!(flash.contains("refused"));
    }

    #[tokio::test]
    async fn test_help_overlay_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::F(1));
        assert!(app.state().show_help);

        type_text(&mut app, "q");
        assert!(app.state().input.is_empty());
        press(&mut app, KeyCode::Esc);
        assert!(!app.state().show_help);

        type_text(&mut app, "q");
        press(&mut app, KeyCode::F(1));
        press(&mut app, KeyCode::Esc);
        // Esc only closed the overlay
        assert_eq!(app.state().input, "q");

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().should_quit);
    }

    #[tokio::test]
    async fn test_help_overlay_blocks_triggers() {
        let mut app = app();
        type_text(&mut app, "もも");
        press(&mut app, KeyCode::F(1));

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().mode, AnalysisMode::Normal);
        assert!(!app.state().pending);
        assert!(app.completion_rx.try_recv().is_err());

        press(&mut app, KeyCode::F(1));
        assert!(!app.state().show_help);
        press(&mut app, KeyCode::Enter);
        assert!(app.state().pending);
    }
}
