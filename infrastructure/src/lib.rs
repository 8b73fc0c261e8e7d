//! Infrastructure layer for tokenscope
//!
//! This crate contains the adapters that implement the ports defined in the
//! application layer (the HTTP tokenizer gateway) and configuration file
//! loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, ConfigSources, FileConfig, FileDispatchConfig, FileDisplayConfig,
    FileServiceConfig, Severity,
};
pub use http::{
    encoding::{URI_COMPONENT, encode_text, mode_param},
    endpoint::{Endpoint, ModeEncoding, RequestMethod},
    gateway::HttpTokenizerGateway,
    wire::decode_payload,
};
