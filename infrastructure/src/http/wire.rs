//! Response payload decoding
//!
//! Two service generations are in the wild: the legacy one answers with a
//! bare array of `{surface, features}` rows, the newer one wraps structured
//! tokens in an envelope. Both decode to the same [`ResultSet`].

use serde::Deserialize;
use tokenscope_application::GatewayError;
use tokenscope_domain::{ResultSet, TokenRow};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Legacy(Vec<LegacyRow>),
    Envelope(Envelope),
}

#[derive(Debug, Deserialize)]
struct LegacyRow {
    surface: String,
    features: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    tokens: Vec<EnvelopeToken>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeToken {
    surface: String,
    #[serde(default)]
    pos: Option<String>,
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    reading: Option<String>,
    #[serde(default)]
    pronunciation: Option<String>,
}

impl EnvelopeToken {
    /// `pos,base,reading,pronunciation`, skipping absent fields
    fn features(&self) -> String {
        [&self.pos, &self.base, &self.reading, &self.pronunciation]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Decode a response body into result rows, preserving service order.
pub fn decode_payload(body: &[u8]) -> Result<ResultSet, GatewayError> {
    let payload: Payload = serde_json::from_slice(body).map_err(|e| {
        GatewayError::MalformedPayload(format!("unrecognized tokenizer response: {}", e))
    })?;

    let rows = match payload {
        Payload::Legacy(rows) => rows
            .into_iter()
            .map(|row| TokenRow::new(row.surface, row.features))
            .collect(),
        Payload::Envelope(envelope) => envelope
            .tokens
            .into_iter()
            .map(|token| {
                let features = token.features();
                TokenRow::new(token.surface, features)
            })
            .collect(),
    };

    Ok(rows)
}
