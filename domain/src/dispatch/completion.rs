//! Completion resolution.
//!
//! A completion is the `(sequence, result-or-failure)` pair produced when a
//! dispatched request finishes. [`resolve_completion`] maps it to exactly one
//! of three outcomes without touching any state.

use super::sequence::DispatchSeq;
use crate::token::entities::ResultSet;

/// A finished dispatch, as posted back to the UI loop.
#[derive(Debug, Clone)]
pub struct Completion<E> {
    pub seq: DispatchSeq,
    pub result: Result<ResultSet, E>,
}

impl<E> Completion<E> {
    pub fn new(seq: DispatchSeq, result: Result<ResultSet, E>) -> Self {
        Self { seq, result }
    }

    pub fn success(seq: DispatchSeq, rows: ResultSet) -> Self {
        Self::new(seq, Ok(rows))
    }

    pub fn failure(seq: DispatchSeq, error: E) -> Self {
        Self::new(seq, Err(error))
    }
}

/// What the display should do with a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome<E> {
    /// Latest dispatch succeeded: clear, then render these rows
    Render(ResultSet),
    /// Latest dispatch failed: leave the display as last cleared
    Failed(E),
    /// Superseded by a later dispatch: ignore
    Stale {
        seq: DispatchSeq,
        latest: Option<DispatchSeq>,
    },
}

impl<E> CompletionOutcome<E> {
    pub fn is_stale(&self) -> bool {
        matches!(self, CompletionOutcome::Stale { .. })
    }
}

/// Decide the outcome of `completion` given the latest issued sequence.
pub fn resolve_completion<E>(
    latest: Option<DispatchSeq>,
    completion: Completion<E>,
) -> CompletionOutcome<E> {
    if latest != Some(completion.seq) {
        return CompletionOutcome::Stale {
            seq: completion.seq,
            latest,
        };
    }
    match completion.result {
        Ok(rows) => CompletionOutcome::Render(rows),
        Err(error) => CompletionOutcome::Failed(error),
    }
}
