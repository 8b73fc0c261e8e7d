//! Display configuration from TOML (`[display]` section)

use serde::{Deserialize, Serialize};

/// Raw display configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDisplayConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Prefix each token row with its position
    pub show_index: bool,
}

impl Default for FileDisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_index: false,
        }
    }
}
