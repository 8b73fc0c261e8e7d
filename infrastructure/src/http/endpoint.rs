//! Tokenize endpoint description

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use tokenscope_application::GatewayError;

/// HTTP method used for the tokenize call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestMethod {
    /// `GET` with `text` and `mode` in the query string
    #[default]
    Get,
    /// `POST` with an `application/x-www-form-urlencoded` body
    PostForm,
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestMethod::Get => write!(f, "get"),
            RequestMethod::PostForm => write!(f, "post-form"),
        }
    }
}

/// Wire representation of the analysis mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeEncoding {
    /// Position in the mode list (`0`, `1`, `2`)
    #[default]
    Index,
    /// Stable mode name (`normal`, `search`, `extended`)
    Name,
}

/// Fully resolved tokenize endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
    method: RequestMethod,
    mode_encoding: ModeEncoding,
}

impl Endpoint {
    /// Join `path` onto `base_url` and check the result is an http(s) URL.
    ///
    /// The base is treated as a directory, so `http://h/kuromoji/rest` plus
    /// `tokenizer/tokenize` gives `http://h/kuromoji/rest/tokenizer/tokenize`.
    pub fn parse(
        base_url: &str,
        path: &str,
        method: RequestMethod,
        mode_encoding: ModeEncoding,
    ) -> Result<Self, GatewayError> {
        let base_url = base_url.trim();
        let mut base = Url::parse(base_url)
            .map_err(|e| GatewayError::InvalidEndpoint(format!("{}: {}", base_url, e)))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(GatewayError::InvalidEndpoint(format!(
                "unsupported scheme '{}' in {}",
                base.scheme(),
                base_url
            )));
        }

        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }

        let url = base
            .join(path.trim().trim_start_matches('/'))
            .map_err(|e| GatewayError::InvalidEndpoint(format!("{}: {}", path, e)))?;

        Ok(Self {
            url,
            method,
            mode_encoding,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    pub fn mode_encoding(&self) -> ModeEncoding {
        self.mode_encoding
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}
