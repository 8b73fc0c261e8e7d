//! Analysis mode definitions for the remote tokenizer.
//!
//! The service understands three segmentation modes, addressed on the wire by
//! their position in [`AnalysisMode::ALL`]:
//!
//! | Index | Mode | Label |
//! |-------|------|-------|
//! | 0 | `normal` | normal mode |
//! | 1 | `search` | search mode |
//! | 2 | `extended` | extended search mode |

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Segmentation mode requested from the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Regular segmentation
    #[default]
    Normal,
    /// Decompounding segmentation tuned for search
    Search,
    /// Search segmentation with unknown words split into unigrams
    Extended,
}

impl AnalysisMode {
    /// All modes in cycling order. The position of a mode is its wire index.
    pub const ALL: [AnalysisMode; 3] = [
        AnalysisMode::Normal,
        AnalysisMode::Search,
        AnalysisMode::Extended,
    ];

    /// Position of this mode in [`AnalysisMode::ALL`]
    pub fn index(&self) -> usize {
        match self {
            AnalysisMode::Normal => 0,
            AnalysisMode::Search => 1,
            AnalysisMode::Extended => 2,
        }
    }

    /// Look up a mode by its position in [`AnalysisMode::ALL`]
    pub fn from_index(index: usize) -> Result<Self, DomainError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(DomainError::ModeIndexOutOfRange {
                index,
                len: Self::ALL.len(),
            })
    }

    /// Human-readable label shown in the mode indicator
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::Normal => "normal mode",
            AnalysisMode::Search => "search mode",
            AnalysisMode::Extended => "extended search mode",
        }
    }

    /// Stable identifier, used when the service expects names instead of indices
    pub fn name(&self) -> &'static str {
        match self {
            AnalysisMode::Normal => "normal",
            AnalysisMode::Search => "search",
            AnalysisMode::Extended => "extended",
        }
    }

    /// The mode that follows this one, wrapping after the last
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for AnalysisMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index);
        }
        match trimmed.to_lowercase().as_str() {
            "normal" | "n" => Ok(AnalysisMode::Normal),
            "search" | "s" => Ok(AnalysisMode::Search),
            "extended" | "ext" | "e" => Ok(AnalysisMode::Extended),
            _ => Err(DomainError::InvalidMode(s.to_string())),
        }
    }
}
