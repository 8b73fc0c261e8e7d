//! Application-level configuration.
//!
//! - [`DispatchParams`]: request preparation (input length limit, startup mode)

pub mod dispatch_params;

pub use dispatch_params::DispatchParams;
