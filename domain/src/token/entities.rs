//! Token rows and result sets.

use serde::{Deserialize, Serialize};

/// One token returned by the tokenizer.
///
/// `features` is an opaque annotation string (part of speech, readings, ...)
/// and is never parsed by the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRow {
    /// The literal span of input text covered by this token
    pub surface: String,
    /// Descriptive annotation, displayed verbatim
    pub features: String,
}

impl TokenRow {
    pub fn new(surface: impl Into<String>, features: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            features: features.into(),
        }
    }
}

/// Ordered tokens of one completed request.
///
/// Order is significant: it is the left-to-right order of the tokens in
/// the input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    rows: Vec<TokenRow>,
}

impl ResultSet {
    pub fn new(rows: Vec<TokenRow>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[TokenRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<TokenRow> {
        self.rows
    }
}

impl From<Vec<TokenRow>> for ResultSet {
    fn from(rows: Vec<TokenRow>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<TokenRow> for ResultSet {
    fn from_iter<I: IntoIterator<Item = TokenRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a TokenRow;
    type IntoIter = std::slice::Iter<'a, TokenRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let set: ResultSet = vec![
            TokenRow::new("すもも", "名詞"),
            TokenRow::new("も", "助詞"),
        ]
        .into();
        let surfaces: Vec<_> = set.iter().map(|r| r.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["すもも", "も"]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let set = ResultSet::new(vec![TokenRow::new("も", "助詞,係助詞")]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"surface":"も","features":"助詞,係助詞"}]"#);
    }

    #[test]
    fn test_empty() {
        assert!(ResultSet::empty().is_empty());
        assert_eq!(ResultSet::empty().len(), 0);
    }
}
