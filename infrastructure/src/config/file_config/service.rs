//! Service configuration from TOML (`[service]` section)

use crate::http::endpoint::{ModeEncoding, RequestMethod};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where the tokenizer lives and how to talk to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Base URL of the REST application
    pub base_url: String,
    /// Path of the tokenize resource, relative to `base_url`
    pub tokenize_path: String,
    /// `get` (query string) or `post-form` (form body)
    pub method: RequestMethod,
    /// How the mode parameter is sent: `index` or `name`
    pub mode_encoding: ModeEncoding,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/kuromoji/rest".to_string(),
            tokenize_path: "tokenizer/tokenize".to_string(),
            method: RequestMethod::default(),
            mode_encoding: ModeEncoding::default(),
            timeout_secs: 10,
        }
    }
}

impl FileServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
