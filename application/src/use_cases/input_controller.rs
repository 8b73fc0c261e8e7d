//! Input controller: maps UI triggers onto the mode register, the
//! dispatcher and the display.
//!
//! | Trigger | Effect |
//! |---------|--------|
//! | submit | clear display, dispatch (query, mode) |
//! | clear-input | empty input, focus input, clear display |
//! | mode-cycle | cycle mode, update label, focus input, submit |
//! | completion | latest only: clear display, render rows |
//!
//! The controller owns the [`ModeRegister`]; UI state is passed in as a
//! [`ConsoleView`] on every call, so the query is always read fresh from the
//! input field.

use crate::ports::surface::ConsoleView;
use crate::ports::tokenizer_gateway::{GatewayError, TokenizerGateway};
use crate::use_cases::dispatch::RequestDispatcher;
use tokenscope_domain::{AnalysisMode, Completion, CompletionOutcome, DispatchSeq, ModeRegister};
use tracing::{debug, info, warn};

/// Drives the tokenizer console from UI triggers
pub struct InputController<G: TokenizerGateway + 'static> {
    register: ModeRegister,
    dispatcher: RequestDispatcher<G>,
}

impl<G: TokenizerGateway + 'static> InputController<G> {
    pub fn new(dispatcher: RequestDispatcher<G>) -> Self {
        Self {
            register: ModeRegister::new(),
            dispatcher,
        }
    }

    /// Startup wiring: reset the mode, show its label, focus the input.
    ///
    /// If the configured initial mode is not the first one, the register is
    /// cycled up to it. No request is dispatched.
    pub fn bootstrap(&mut self, view: &mut dyn ConsoleView) -> AnalysisMode {
        self.register.reset();
        let initial = self.dispatcher.params().initial_mode;
        while self.register.current_mode() != initial {
            self.register.cycle();
        }
        let mode = self.register.current_mode();
        view.set_mode_label(mode);
        view.focus();
        info!("Console ready in {}", mode.label());
        mode
    }

    pub fn current_mode(&self) -> AnalysisMode {
        self.register.current_mode()
    }

    /// True while the latest dispatch has not completed
    pub fn is_pending(&self) -> bool {
        self.dispatcher.is_pending()
    }

    /// Submit trigger: clear the display and dispatch the current query
    pub fn submit(&mut self, view: &mut dyn ConsoleView) -> DispatchSeq {
        let query = view.text();
        let mode = self.register.current_mode();
        view.clear();
        self.dispatcher.dispatch(&query, mode)
    }

    /// Clear-input trigger: empty the query, refocus, clear the display.
    ///
    /// Requests still in flight are for text that is gone, so their
    /// completions are discarded.
    pub fn clear_input(&mut self, view: &mut dyn ConsoleView) {
        self.dispatcher.invalidate();
        view.clear_text();
        view.focus();
        view.clear();
    }

    /// Mode-cycle trigger: advance the mode and re-dispatch the current query
    pub fn cycle_mode(&mut self, view: &mut dyn ConsoleView) -> DispatchSeq {
        let mode = self.register.cycle();
        view.set_mode_label(mode);
        view.focus();
        debug!("Mode changed to {}", mode);
        self.submit(view)
    }

    /// Apply a finished dispatch to the view.
    ///
    /// Only the latest dispatch reaches the display. A failure leaves the
    /// display as it was cleared at submit time and is reported to the
    /// status sink.
    pub fn on_completion(
        &mut self,
        completion: Completion<GatewayError>,
        view: &mut dyn ConsoleView,
    ) -> CompletionOutcome<GatewayError> {
        let outcome = self.dispatcher.resolve(completion);
        match &outcome {
            CompletionOutcome::Render(rows) => {
                view.clear();
                view.render(rows);
                info!("Rendered {} tokens", rows.len());
            }
            CompletionOutcome::Failed(error) => {
                warn!("Tokenize request failed: {}", error);
                view.report_failure(error);
            }
            CompletionOutcome::Stale { seq, latest } => {
                debug!("Discarding stale completion {} (latest: {:?})", seq, latest);
            }
        }
        outcome
    }

    /// Cancel in-flight requests (application exit)
    pub fn shutdown(&self) {
        self.dispatcher.shutdown();
    }
}
