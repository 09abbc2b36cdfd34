use std::fmt::{self, Display, Formatter};

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single option value inside a configuration block.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Multi-value option; element order is significant and never sorted.
    List(Vec<OptionValue>),
    /// Nested mapping (used by platforms whose model is not flat).
    Map(BlockOptions),
}

impl OptionValue {
    fn sort_nested(&mut self) {
        match self {
            Self::Map(map) => map.sort(),
            Self::List(items) => items.iter_mut().for_each(Self::sort_nested),
            _ => {}
        }
    }

    /// Convert a JSON value into an option value.
    ///
    /// `null` means "not set" and yields `None`; `null` entries inside lists
    /// are dropped.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => Some(match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or_default()),
            }),
            Value::String(s) => Some(Self::Str(s.clone())),
            Value::Array(items) => Some(Self::List(
                items.iter().filter_map(Self::from_json).collect(),
            )),
            Value::Object(map) => Some(Self::Map(BlockOptions::from_json_map(map))),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[OptionValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BlockOptions> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl Display for OptionValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in map.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::Str(s) => serializer.serialize_str(s),
            Self::List(items) => items.serialize(serializer),
            Self::Map(map) => map.serialize(serializer),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for OptionValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u16> for OptionValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for OptionValue {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value.into_iter().map(Self::Str).collect())
    }
}

impl From<Vec<OptionValue>> for OptionValue {
    fn from(value: Vec<OptionValue>) -> Self {
        Self::List(value)
    }
}

impl From<BlockOptions> for OptionValue {
    fn from(value: BlockOptions) -> Self {
        Self::Map(value)
    }
}

/// Ordered key/value options of a block.
///
/// Insertion order is kept until [`BlockOptions::sort`] is called; keys are
/// unique (inserting an existing key replaces its value in place).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockOptions {
    entries: Vec<(String, OptionValue)>,
}

impl BlockOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a JSON object, skipping `null` values.
    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        let mut options = Self::new();
        options.extend_json(map);
        options
    }

    /// Insert or replace `key`, returning the previous value if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Insert `value` when present; `None` clears any existing value.
    pub fn insert_opt<V: Into<OptionValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        let key = key.into();
        match value {
            Some(value) => {
                self.insert(key, value);
            }
            None => {
                self.remove(&key);
            }
        }
    }

    /// Merge every field of a JSON object; `null` fields clear the key.
    pub fn extend_json(&mut self, map: &Map<String, Value>) {
        for (key, value) in map {
            self.insert_opt(key.as_str(), OptionValue::from_json(value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Move the value stored under `from` to `to`, replacing any value at `to`.
    pub fn rename(&mut self, from: &str, to: &str) {
        if let Some(value) = self.remove(from) {
            self.insert(to, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Sort entries by key, recursing into nested maps (including maps held
    /// in lists). List values keep their element order.
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (_, value) in &mut self.entries {
            value.sort_nested();
        }
    }

    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for BlockOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

impl Serialize for BlockOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One named, typed configuration block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    /// Platform block type (for example `interface` or `wifi-iface`).
    #[serde(rename = "type")]
    pub block_type: String,
    /// Block identifier, unique per type within a section.
    pub name: String,
    pub options: BlockOptions,
}

impl Block {
    pub fn new(block_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_options(block_type, name, BlockOptions::new())
    }

    pub fn with_options(
        block_type: impl Into<String>,
        name: impl Into<String>,
        options: BlockOptions,
    ) -> Self {
        Self {
            block_type: block_type.into(),
            name: name.into(),
            options,
        }
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.options.get_str(key)
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.block_type, self.name)?;
        for (key, value) in self.options.iter() {
            write!(f, "\n  {key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Block, BlockOptions, OptionValue};

    #[test]
    fn insert_replaces_in_place() {
        let mut options = BlockOptions::new();
        options.insert("proto", "static");
        options.insert("ifname", "eth0");
        options.insert("proto", "dhcp");

        let keys: Vec<&str> = options.keys().collect();
        assert_eq!(keys, vec!["proto", "ifname"]);
        assert_eq!(options.get_str("proto"), Some("dhcp"));
    }

    #[test]
    fn sort_orders_keys_but_not_list_items() {
        let mut options = BlockOptions::new();
        options.insert("zeta", vec!["b".to_string(), "a".to_string()]);
        options.insert("alpha", true);
        options.sort();

        let keys: Vec<&str> = options.keys().collect();
        assert_eq!(keys, vec!["alpha", "zeta"]);
        assert_eq!(options.get("zeta").map(ToString::to_string), Some("b a".to_string()));
    }

    #[test]
    fn sorted_reaches_nested_maps() {
        let inner: BlockOptions = [("wpa", "2"), ("auth_algs", "1")].into_iter().collect();
        let entry: BlockOptions = [("netmask", "255.0.0.0"), ("address", "10.0.0.1")]
            .into_iter()
            .collect();
        let mut options = BlockOptions::new();
        options.insert("encryption", OptionValue::Map(inner));
        options.insert(
            "address",
            OptionValue::List(vec![OptionValue::Map(entry), OptionValue::from("last")]),
        );
        let options = options.sorted();

        let keys: Vec<&str> = options.keys().collect();
        assert_eq!(keys, vec!["address", "encryption"]);
        let nested: Vec<&str> = options
            .get("encryption")
            .and_then(OptionValue::as_map)
            .map(|map| map.keys().collect())
            .unwrap_or_default();
        assert_eq!(nested, vec!["auth_algs", "wpa"]);

        let list = options.get("address").and_then(OptionValue::as_list).expect("list");
        let first: Vec<&str> = list[0].as_map().map(|map| map.keys().collect()).unwrap_or_default();
        assert_eq!(first, vec!["address", "netmask"]);
        assert_eq!(list[1].as_str(), Some("last"));
    }

    #[test]
    fn json_nulls_are_not_set() {
        let value = json!({"mtu": 1500, "dns": null, "list": ["a", null, "b"]});
        let options = BlockOptions::from_json_map(value.as_object().expect("object"));

        assert!(!options.contains_key("dns"));
        assert_eq!(options.get("mtu"), Some(&OptionValue::Int(1500)));
        assert_eq!(
            options.get("list").and_then(OptionValue::as_list).map(<[_]>::len),
            Some(2)
        );
    }

    #[test]
    fn rename_moves_value() {
        let mut options: BlockOptions = [("tx_power", 5i64)].into_iter().collect();
        options.rename("tx_power", "txpower");
        assert_eq!(options.get("txpower").and_then(OptionValue::as_i64), Some(5));
        assert!(!options.contains_key("tx_power"));
    }

    #[test]
    fn block_display_lists_options() {
        let mut block = Block::new("interface", "lan");
        block.options.insert("ifname", "eth0");
        assert_eq!(block.to_string(), "interface lan\n  ifname=eth0");
    }
}
