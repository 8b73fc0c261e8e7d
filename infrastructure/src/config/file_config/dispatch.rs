//! Dispatch configuration from TOML (`[dispatch]` section)

use serde::{Deserialize, Serialize};
use tokenscope_application::DispatchParams;
use tokenscope_application::config::dispatch_params::DEFAULT_MAX_INPUT_CHARS;
use tokenscope_domain::AnalysisMode;

/// Raw dispatch configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDispatchConfig {
    /// Longer input is trimmed before it is sent
    pub max_input_chars: usize,
    /// Mode selected at startup
    pub initial_mode: AnalysisMode,
}

impl Default for FileDispatchConfig {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            initial_mode: AnalysisMode::Normal,
        }
    }
}

impl FileDispatchConfig {
    /// Convert to the application-layer parameters
    pub fn to_params(&self) -> DispatchParams {
        DispatchParams::default()
            .with_max_input_chars(self.max_input_chars)
            .with_initial_mode(self.initial_mode)
    }
}
