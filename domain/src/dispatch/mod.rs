//! Dispatch sequencing: which response may reach the display.
//!
//! Requests are fire-and-forget and may complete out of order. Each one is
//! tagged with a [`sequence::DispatchSeq`]; a completion is applied only if
//! its tag is the latest one issued.

pub mod completion;
pub mod sequence;
