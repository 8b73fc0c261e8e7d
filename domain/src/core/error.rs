//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid analysis mode: {0}")]
    InvalidMode(String),

    #[error("Mode index {index} out of range (expected 0..{len})")]
    ModeIndexOutOfRange { index: usize, len: usize },
}

impl DomainError {
    /// Check if this error came from parsing a mode
    pub fn is_mode_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidMode(_) | DomainError::ModeIndexOutOfRange { .. }
        )
    }
}
