//! Tokenizer Gateway port
//!
//! Defines the interface for reaching the remote tokenization service.

use async_trait::async_trait;
use thiserror::Error;
use tokenscope_domain::{AnalysisMode, ResultSet};

/// Reasons a tokenize request did not produce a result set.
///
/// Every variant is a `RequestFailed` condition from the console's point of
/// view: the display is never updated with partial data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Service responded with HTTP {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl GatewayError {
    /// Short label for status lines
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Connection(_) => "connection",
            GatewayError::Timeout => "timeout",
            GatewayError::Status { .. } => "status",
            GatewayError::MalformedPayload(_) => "payload",
            GatewayError::InvalidEndpoint(_) => "endpoint",
        }
    }
}

/// A single tokenize request: raw text plus mode.
///
/// The text is carried unencoded; adapters apply the wire encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeRequest {
    pub text: String,
    pub mode: AnalysisMode,
}

impl TokenizeRequest {
    pub fn new(text: impl Into<String>, mode: AnalysisMode) -> Self {
        Self {
            text: text.into(),
            mode,
        }
    }
}

/// Gateway to the remote tokenizer
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait TokenizerGateway: Send + Sync {
    /// Tokenize `request.text` using `request.mode`
    async fn tokenize(&self, request: &TokenizeRequest) -> Result<ResultSet, GatewayError>;
}
