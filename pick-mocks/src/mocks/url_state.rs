//! URL state persistence for mock pages
//!
//! Serializes control state as base64-encoded JSON in the query string,
//! keeping URLs opaque and avoiding conflicts with query parameter names.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UrlStateError {
    #[error("state is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("state is not a JSON string map: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a state string from a URL query parameter into key-value pairs.
pub fn parse_state(encoded: &str) -> Result<Vec<(String, String)>, UrlStateError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let json_bytes = URL_SAFE_NO_PAD.decode(encoded)?;
    let map: BTreeMap<String, String> = serde_json::from_slice(&json_bytes)?;

    Ok(map.into_iter().collect())
}

/// Encode key-value pairs into a base64 state string for the URL.
pub fn build_state(pairs: &[(String, String)]) -> Result<String, UrlStateError> {
    let map: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let json = serde_json::to_string(&map)?;
    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// Collects non-default control values and produces an encoded state string
#[derive(Default)]
pub struct StateBuilder {
    pairs: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            self.pairs
                .push((key.to_string(), if value { "1" } else { "0" }.to_string()));
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str, default: &str) {
        if value != default {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    /// `None` when every control is at its default
    pub fn build_option(self) -> Result<Option<String>, UrlStateError> {
        if self.pairs.is_empty() {
            Ok(None)
        } else {
            build_state(&self.pairs).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_survives_url() {
        let pairs = vec![
            ("mode".to_string(), "multiple".to_string()),
            ("seeded".to_string(), "1".to_string()),
        ];
        let encoded = build_state(&pairs).unwrap();
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(parse_state(&encoded).unwrap(), pairs);
    }

    #[test]
    fn test_empty_state() {
        assert!(parse_state("").unwrap().is_empty());
    }

    #[test]
    fn test_bad_base64() {
        assert!(matches!(
            parse_state("not base64!"),
            Err(UrlStateError::Base64(_))
        ));
    }

    #[test]
    fn test_bad_json() {
        let encoded = URL_SAFE_NO_PAD.encode(b"[1, 2]");
        assert!(matches!(parse_state(&encoded), Err(UrlStateError::Json(_))));
    }

    #[test]
    fn test_builder_skips_defaults() {
        let mut builder = StateBuilder::new();
        builder.set_bool("seeded", false, false);
        builder.set_string("mode", "single", "single");
        assert_eq!(builder.build_option().unwrap(), None);

        let mut builder = StateBuilder::new();
        builder.set_bool("seeded", true, false);
        builder.set_string("mode", "multiple", "single");
        let encoded = builder.build_option().unwrap().unwrap();
        assert_eq!(
            parse_state(&encoded).unwrap(),
            vec![
                ("mode".to_string(), "multiple".to_string()),
                ("seeded".to_string(), "1".to_string()),
            ]
        );
    }
}
