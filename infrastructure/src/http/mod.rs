//! HTTP adapter for the remote tokenizer
//!
//! [`gateway::HttpTokenizerGateway`] implements the application's
//! `TokenizerGateway` port with `reqwest`. The request shape lives in
//! [`endpoint`], query encoding in [`encoding`], response decoding in [`wire`].

pub mod encoding;
pub mod endpoint;
pub mod gateway;
pub mod wire;
