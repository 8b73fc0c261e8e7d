//! Query text and mode parameter encoding

use crate::http::endpoint::ModeEncoding;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tokenscope_domain::AnalysisMode;

/// Characters escaped in a URI component.
///
/// Alphanumerics and `- _ . ! ~ * ' ( )` pass through; everything else,
/// including every non-ASCII byte of the UTF-8 encoding, is `%XX` escaped.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode query text for transmission.
pub fn encode_text(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Wire value of the mode parameter.
pub fn mode_param(mode: AnalysisMode, encoding: ModeEncoding) -> String {
    match encoding {
        ModeEncoding::Index => mode.index().to_string(),
        ModeEncoding::Name => mode.name().to_string(),
    }
}
