//! Monotonic dispatch sequence numbers.

use super::completion::{Completion, CompletionOutcome, resolve_completion};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag attached to a single dispatch. Larger means issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DispatchSeq(u64);

impl DispatchSeq {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DispatchSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues sequence numbers and remembers the latest one.
///
/// The first issued sequence is `#1`. The tracker also records whether the
/// latest dispatch has settled (completed or failed), which drives the
/// "in flight" indicator.
#[derive(Debug, Clone, Default)]
pub struct SequenceTracker {
    latest: Option<DispatchSeq>,
    latest_settled: bool,
}

impl SequenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next sequence number; it becomes the latest.
    pub fn issue(&mut self) -> DispatchSeq {
        let next = self.latest.map_or(1, |seq| seq.value() + 1);
        let seq = DispatchSeq::new(next);
        self.latest = Some(seq);
        self.latest_settled = false;
        seq
    }

    /// Issue a sequence that no dispatch will complete.
    ///
    /// Every completion still in flight resolves as stale afterwards, and
    /// nothing is pending.
    pub fn invalidate(&mut self) -> DispatchSeq {
        let seq = self.issue();
        self.latest_settled = true;
        seq
    }

    /// The most recently issued sequence, if any
    pub fn latest(&self) -> Option<DispatchSeq> {
        self.latest
    }

    pub fn is_latest(&self, seq: DispatchSeq) -> bool {
        self.latest == Some(seq)
    }

    /// True while the latest dispatch has not completed yet
    pub fn is_pending(&self) -> bool {
        self.latest.is_some() && !self.latest_settled
    }

    /// Resolve a completion against the latest sequence.
    ///
    /// Marks the latest dispatch as settled when the completion belongs to it.
    pub fn resolve<E>(&mut self, completion: Completion<E>) -> CompletionOutcome<E> {
        let outcome = resolve_completion(self.latest, completion);
        if !outcome.is_stale() {
            self.latest_settled = true;
        }
        outcome
    }
}
