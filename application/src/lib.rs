//! Application layer for tokenscope
//!
//! This crate contains the port definitions, the request dispatcher and the
//! input controller that drives the tokenizer console.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DispatchParams;
pub use ports::{
    surface::{ConsoleView, DisplaySurface, InputSurface, StatusSink},
    tokenizer_gateway::{GatewayError, TokenizeRequest, TokenizerGateway},
};
pub use use_cases::{
    dispatch::{CompletionReceiver, RequestDispatcher},
    input_controller::InputController,
};
