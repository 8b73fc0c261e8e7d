//! reqwest-backed tokenizer gateway

use super::encoding::{encode_text, mode_param};
use super::endpoint::{Endpoint, RequestMethod};
use super::wire::decode_payload;
use crate::config::FileServiceConfig;
use async_trait::async_trait;
use std::time::Duration;
use tokenscope_application::{GatewayError, TokenizeRequest, TokenizerGateway};
use tokenscope_domain::ResultSet;
use tracing::debug;

/// Gateway that calls the tokenizer REST service over HTTP
pub struct HttpTokenizerGateway {
    client: reqwest::Client,
    endpoint: Endpoint,
}

impl HttpTokenizerGateway {
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tokenscope/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Connection(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    /// Build a gateway from the `[service]` configuration section
    pub fn from_config(config: &FileServiceConfig) -> Result<Self, GatewayError> {
        let endpoint = Endpoint::parse(
            &config.base_url,
            &config.tokenize_path,
            config.method,
            config.mode_encoding,
        )?;
        Self::new(endpoint, config.timeout())
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn build_request(&self, request: &TokenizeRequest) -> reqwest::RequestBuilder {
        let text = encode_text(&request.text);
        let mode = mode_param(request.mode, self.endpoint.mode_encoding());

        match self.endpoint.method() {
            RequestMethod::Get => {
                let mut url = self.endpoint.url().clone();
                url.set_query(Some(&format!("text={}&mode={}", text, mode)));
                debug!("GET {}", url);
                self.client.get(url)
            }
            RequestMethod::PostForm => {
                debug!("POST {} (mode={})", self.endpoint.url(), mode);
                self.client
                    .post(self.endpoint.url().clone())
                    .form(&[("text", text), ("mode", mode)])
            }
        }
    }
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_decode() {
        GatewayError::MalformedPayload(error.to_string())
    } else {
        GatewayError::Connection(error.to_string())
    }
}

#[async_trait]
impl TokenizerGateway for HttpTokenizerGateway {
    async fn tokenize(&self, request: &TokenizeRequest) -> Result<ResultSet, GatewayError> {
        let response = self
            .build_request(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        let rows = decode_payload(&body)?;
        debug!("Received {} token rows", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::endpoint::ModeEncoding;
    use tokenscope_domain::AnalysisMode;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKENIZE_PATH: &str = "/kuromoji/rest/tokenizer/tokenize";

    fn gateway_for(server: &MockServer, method: RequestMethod, encoding: ModeEncoding) -> HttpTokenizerGateway {
        let base = format!("{}/kuromoji/rest", server.uri());
        let endpoint = Endpoint::parse(&base, "tokenizer/tokenize", method, encoding).unwrap();
        HttpTokenizerGateway::new(endpoint, Duration::from_secs(5)).unwrap()
    }

    fn legacy_body() -> serde_json::Value {
        serde_json::json!([
            {"surface": "すもも", "features": "名詞,一般,*,*,*,*,すもも,スモモ,スモモ"},
            {"surface": "　", "features": "記号,空白,*,*,*,*,　,　,　"}
        ])
    }

    #[tokio::test]
    async fn test_get_sends_text_and_mode_index() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TOKENIZE_PATH))
            .and(query_param("text", "すもも　"))
            .and(query_param("mode", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(legacy_body()))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server, RequestMethod::Get, ModeEncoding::Index);
        let rows = gateway
            .tokenize(&TokenizeRequest::new("すもも　", AnalysisMode::Normal))
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows.rows()[0].surface, "すもも");
        assert_eq!(rows.rows()[1].surface, "　");
    }

    #[tokio::test]
    async fn test_get_with_mode_names() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TOKENIZE_PATH))
            .and(query_param("mode", "extended"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server, RequestMethod::Get, ModeEncoding::Name);
        let rows = gateway
            .tokenize(&TokenizeRequest::new("x", AnalysisMode::Extended))
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_envelope_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TOKENIZE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "input": "寿司",
                "mode": 1,
                "tokens": [{"surface": "寿司", "pos": "名詞", "base": "寿司", "reading": "スシ"}]
            })))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server, RequestMethod::Get, ModeEncoding::Index);
        let rows = gateway
            .tokenize(&TokenizeRequest::new("寿司", AnalysisMode::Search))
            .await
            .unwrap();
        assert_eq!(rows.rows()[0].features, "名詞,寿司,スシ");
    }

    #[tokio::test]
    async fn test_post_form_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TOKENIZE_PATH))
            // Pre-encoded text is form-encoded once more
            .and(body_string_contains("text=%25E3%2581%2599"))
            .and(body_string_contains("mode=1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(legacy_body()))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server, RequestMethod::PostForm, ModeEncoding::Index);
        let rows = gateway
            .tokenize(&TokenizeRequest::new("す", AnalysisMode::Search))
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server, RequestMethod::Get, ModeEncoding::Index);
        let err = gateway
            .tokenize(&TokenizeRequest::new("x", AnalysisMode::Normal))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::Status {
                status: 500,
                reason: "Internal Server Error".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server, RequestMethod::Get, ModeEncoding::Index);
        let err = gateway
            .tokenize(&TokenizeRequest::new("x", AnalysisMode::Normal))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::MalformedPayload(_)));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let base = format!("{}/kuromoji/rest", server.uri());
        let endpoint =
            Endpoint::parse(&base, "tokenizer/tokenize", RequestMethod::Get, ModeEncoding::Index)
                .unwrap();
        let gateway = HttpTokenizerGateway::new(endpoint, Duration::from_millis(100)).unwrap();

        let err = gateway
            .tokenize(&TokenizeRequest::new("x", AnalysisMode::Normal))
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::Timeout);
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        let endpoint = Endpoint::parse(
            "http://127.0.0.1:1/kuromoji/rest",
            "tokenizer/tokenize",
            RequestMethod::Get,
            ModeEncoding::Index,
        )
        .unwrap();
        let gateway = HttpTokenizerGateway::new(endpoint, Duration::from_secs(2)).unwrap();

        let err = gateway
            .tokenize(&TokenizeRequest::new("x", AnalysisMode::Normal))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Connection(_)));
    }

    #[test]
    fn test_from_config_rejects_bad_url() {
        let config = FileServiceConfig {
            base_url: "localhost:8080".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            HttpTokenizerGateway::from_config(&config),
            Err(GatewayError::InvalidEndpoint(_))
        ));
    }
}
