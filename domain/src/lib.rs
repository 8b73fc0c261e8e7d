//! Domain layer for tokenscope
//!
//! This crate contains the core state of the tokenizer console: analysis
//! modes, token rows, and the sequencing rules that decide which response
//! is allowed to reach the display. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Analysis Mode
//!
//! The remote tokenizer segments text differently depending on the mode:
//!
//! - **Normal**: regular segmentation
//! - **Search**: splits long compounds for search indexing
//! - **Extended**: search segmentation plus unigram output for unknown words
//!
//! The [`ModeRegister`] holds the active mode and cycles through
//! [`AnalysisMode::ALL`] in order.
//!
//! ## Dispatch Sequencing
//!
//! Every request carries a [`DispatchSeq`]. Only the completion of the most
//! recently issued request may update the display; see
//! [`dispatch::completion::resolve_completion`].

pub mod core;
pub mod dispatch;
pub mod mode;
pub mod token;
pub mod util;

// Re-export commonly used types
pub use core::error::DomainError;
pub use dispatch::{
    completion::{Completion, CompletionOutcome, resolve_completion},
    sequence::{DispatchSeq, SequenceTracker},
};
pub use mode::{analysis_mode::AnalysisMode, register::ModeRegister};
pub use token::{
    display::{SPACE_PLACEHOLDER, display_surface},
    entities::{ResultSet, TokenRow},
};
