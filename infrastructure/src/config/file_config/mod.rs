//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod dispatch;
mod display;
mod service;

pub use dispatch::FileDispatchConfig;
pub use display::FileDisplayConfig;
pub use service::FileServiceConfig;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote tokenizer endpoint
    pub service: FileServiceConfig,
    /// Request preparation
    pub dispatch: FileDispatchConfig,
    /// Rendering options
    pub display: FileDisplayConfig,
}

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The value is replaced by a fallback; startup continues
    Warning,
    /// The configuration cannot be used
    Error,
}

/// A single problem found by [`FileConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}: {}", level, self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let base_url = self.service.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigIssue::error(
                "service.base_url",
                "base URL must not be empty",
            ));
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                "service.base_url",
                format!("'{}' is not an http(s) URL", base_url),
            ));
        }

        if self.service.tokenize_path.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "service.tokenize_path",
                "empty path, requests go to the base URL itself",
            ));
        }

        if self.service.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "service.timeout_secs",
                "timeout must be at least 1 second",
            ));
        }

        if self.dispatch.max_input_chars == 0 {
            issues.push(ConfigIssue::error(
                "dispatch.max_input_chars",
                "input limit must be greater than zero",
            ));
        }

        issues
    }
}
