//! Dispatch parameters: request preparation.
//!
//! [`DispatchParams`] groups the static parameters used by
//! [`RequestDispatcher`](crate::use_cases::dispatch::RequestDispatcher) and
//! the controller bootstrap. These are application-layer concerns, not
//! domain policy.

use serde::{Deserialize, Serialize};
use tokenscope_domain::AnalysisMode;

/// Upper bound the tokenizer service accepts for a single input
pub const DEFAULT_MAX_INPUT_CHARS: usize = 512;

/// Request preparation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchParams {
    /// Input longer than this many characters is trimmed before dispatch.
    pub max_input_chars: usize,
    /// Mode selected right after bootstrap.
    pub initial_mode: AnalysisMode,
}

impl Default for DispatchParams {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            initial_mode: AnalysisMode::Normal,
        }
    }
}

impl DispatchParams {
    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = max;
        self
    }

    pub fn with_initial_mode(mut self, mode: AnalysisMode) -> Self {
        self.initial_mode = mode;
        self
    }
}
