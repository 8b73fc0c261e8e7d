//! Use cases
//!
//! - [`dispatch`]: issue tokenize requests and post their completions
//! - [`input_controller`]: map UI triggers onto mode changes, dispatches and renders

pub mod dispatch;
pub mod input_controller;
