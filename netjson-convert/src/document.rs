use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::ConvertError;
use crate::netjson::Radio;

/// Errors that can occur while loading a NetJSON document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read NetJSON file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse NetJSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("NetJSON document must be a JSON object")]
    NotAnObject,
}

/// A read-only NetJSON document.
///
/// Converters never see a mutable view: every typed accessor deserializes
/// from a fresh deep copy of the requested subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Map<String, Value>,
}

impl Document {
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(DocumentError::NotAnObject),
        }
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, DocumentError> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    pub fn parse_file(path: &Path) -> Result<Self, DocumentError> {
        let bytes = fs::read(path)?;
        Self::parse(&bytes)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    /// True when `key` is present and holds something other than `null`,
    /// an empty list, an empty object or an empty string.
    pub fn has_entries(&self, key: &str) -> bool {
        match self.root.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    /// Deserialize a copy of the list stored under `key` (empty when absent).
    pub fn copy_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, ConvertError> {
        match self.root.get(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => decode(key, value.clone()),
        }
    }

    /// Deserialize a copy of the object stored under `key`.
    pub fn copy_object<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConvertError> {
        match self.root.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => decode(key, value.clone()).map(Some),
        }
    }

    /// Global string list such as `dns_servers` or `dns_search`.
    ///
    /// Non-string entries are ignored.
    pub fn string_list(&self, key: &str) -> Vec<String> {
        self.root
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Resolve a radio reference made by `entity`.
    pub fn resolve_radio(&self, name: &str, entity: &str) -> Result<Radio, ConvertError> {
        self.copy_list::<Radio>("radios")?
            .into_iter()
            .find(|radio| radio.name == name)
            .ok_or_else(|| ConvertError::UnknownRadio {
                entity: entity.to_string(),
                radio: name.to_string(),
            })
    }
}

fn decode<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, ConvertError> {
    serde_json::from_value(value).map_err(|source| ConvertError::Malformed {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Document, DocumentError};
    use crate::error::ConvertError;
    use crate::netjson::Interface;

    #[test]
    fn rejects_non_object_documents() {
        assert!(matches!(
            Document::parse(b"[1, 2]"),
            Err(DocumentError::NotAnObject)
        ));
    }

    #[test]
    fn has_entries_ignores_empty_values() {
        let doc = Document::from_value(json!({
            "interfaces": [],
            "general": {},
            "radios": [{"name": "radio0"}],
            "dns_servers": null
        }))
        .expect("doc");

        assert!(!doc.has_entries("interfaces"));
        assert!(!doc.has_entries("general"));
        assert!(!doc.has_entries("dns_servers"));
        assert!(!doc.has_entries("routes"));
        assert!(doc.has_entries("radios"));
    }

    #[test]
    fn copies_are_independent_of_the_document() {
        let doc = Document::from_value(json!({
            "interfaces": [{"name": "eth0", "type": "ethernet", "mtu": 1500}]
        }))
        .expect("doc");
        let mut copy: Vec<Interface> = doc.copy_list("interfaces").expect("copy");
        copy[0].name = "changed".to_string();

        let again: Vec<Interface> = doc.copy_list("interfaces").expect("copy again");
        assert_eq!(again[0].name, "eth0");
        assert_eq!(again[0].extra.get("mtu"), Some(&json!(1500)));
    }

    #[test]
    fn unknown_radio_is_a_lookup_error() {
        let doc = Document::from_value(json!({
            "radios": [{"name": "radio0", "protocol": "802.11n", "channel": 1}]
        }))
        .expect("doc");

        assert!(doc.resolve_radio("radio0", "interface wlan0").is_ok());
        let err = doc
            .resolve_radio("radio9", "interface wlan0")
            .expect_err("missing radio");
        assert!(matches!(err, ConvertError::UnknownRadio { ref radio, .. } if radio == "radio9"));
    }

    #[test]
    fn malformed_lists_name_the_key() {
        let doc = Document::from_value(json!({"interfaces": [{"type": "ethernet"}]})).expect("doc");
        let err = doc
            .copy_list::<Interface>("interfaces")
            .expect_err("missing name");
        assert!(err.to_string().starts_with("malformed 'interfaces' section"));
    }
}
