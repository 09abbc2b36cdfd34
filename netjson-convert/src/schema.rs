//! Backend schemas and the validation seam.
//!
//! A [`Schema`] lists the top-level keys a backend understands; everything
//! else is extension material for the passthrough converter. Full JSON-Schema
//! validation plugs in through [`SchemaValidator`]; the bundled
//! [`StructuralValidator`] only checks the shape of known keys.

use serde_json::Value;
use thiserror::Error;

use crate::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// List of objects.
    List,
    Object,
    StringList,
    Any,
}

impl PropertyKind {
    fn describe(self) -> &'static str {
        match self {
            Self::List => "a list of objects",
            Self::Object => "an object",
            Self::StringList => "a list of strings",
            Self::Any => "any value",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    pub key: &'static str,
    pub kind: PropertyKind,
    /// Fields every list entry must carry.
    pub item_required: &'static [&'static str],
}

impl Property {
    pub const fn new(key: &'static str, kind: PropertyKind) -> Self {
        Self {
            key,
            kind,
            item_required: &[],
        }
    }

    pub const fn list(key: &'static str, item_required: &'static [&'static str]) -> Self {
        Self {
            key,
            kind: PropertyKind::List,
            item_required,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub properties: &'static [Property],
    pub required: &'static [&'static str],
}

impl Schema {
    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.key == key)
    }

    pub fn knows(&self, key: &str) -> bool {
        self.property(key).is_some()
    }
}

/// Reasons a document is rejected before conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{schema}: missing required property '{key}'")]
    MissingProperty { schema: &'static str, key: String },
    #[error("{schema}: property '{key}' must be {expected}")]
    WrongKind {
        schema: &'static str,
        key: String,
        expected: &'static str,
    },
    #[error("{schema}: {key}[{index}] is missing required field '{field}'")]
    MissingItemField {
        schema: &'static str,
        key: String,
        index: usize,
        field: &'static str,
    },
}

/// Validates a document against a backend schema.
pub trait SchemaValidator {
    fn validate(&self, schema: &Schema, document: &Document) -> Result<(), SchemaError>;
}

/// Checks required keys, value kinds of known keys and required fields of
/// list entries.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralValidator;

impl SchemaValidator for StructuralValidator {
    fn validate(&self, schema: &Schema, document: &Document) -> Result<(), SchemaError> {
        for key in schema.required {
            if document.get(key).is_none() {
                return Err(SchemaError::MissingProperty {
                    schema: schema.name,
                    key: key.to_string(),
                });
            }
        }

        for property in schema.properties {
            let Some(value) = document.get(property.key) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            check_property(schema, property, value)?;
        }
        Ok(())
    }
}

fn check_property(schema: &Schema, property: &Property, value: &Value) -> Result<(), SchemaError> {
    let wrong_kind = || SchemaError::WrongKind {
        schema: schema.name,
        key: property.key.to_string(),
        expected: property.kind.describe(),
    };

    match property.kind {
        PropertyKind::Any => Ok(()),
        PropertyKind::Object => value.is_object().then_some(()).ok_or_else(wrong_kind),
        PropertyKind::StringList => {
            let items = value.as_array().ok_or_else(wrong_kind)?;
            if items.iter().all(Value::is_string) {
                Ok(())
            } else {
                Err(wrong_kind())
            }
        }
        PropertyKind::List => {
            let items = value.as_array().ok_or_else(wrong_kind)?;
            for (index, item) in items.iter().enumerate() {
                let entry = item.as_object().ok_or_else(wrong_kind)?;
                if let Some(field) = property
                    .item_required
                    .iter()
                    .find(|field| !entry.contains_key(**field))
                {
                    return Err(SchemaError::MissingItemField {
                        schema: schema.name,
                        key: property.key.to_string(),
                        index,
                        field: *field,
                    });
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Property, PropertyKind, Schema, SchemaError, SchemaValidator, StructuralValidator};
    use crate::document::Document;

    const TEST_SCHEMA: Schema = Schema {
        name: "test",
        properties: &[
            Property::list("interfaces", &["name", "type"]),
            Property::new("general", PropertyKind::Object),
            Property::new("dns_servers", PropertyKind::StringList),
        ],
        required: &[],
    };

    fn validate(value: serde_json::Value) -> Result<(), SchemaError> {
        let doc = Document::from_value(value).expect("doc");
        StructuralValidator.validate(&TEST_SCHEMA, &doc)
    }

    #[test]
    fn accepts_well_formed_documents() {
        validate(json!({
            "general": {"hostname": "ap"},
            "interfaces": [{"name": "eth0", "type": "ethernet"}],
            "dns_servers": ["10.0.0.1"],
            "custom": 42
        }))
        .expect("valid");
    }

    #[test]
    fn rejects_wrong_kinds() {
        let err = validate(json!({"general": []})).expect_err("object expected");
        assert_eq!(
            err,
            SchemaError::WrongKind {
                schema: "test",
                key: "general".to_string(),
                expected: "an object",
            }
        );
        assert!(validate(json!({"dns_servers": [1]})).is_err());
        assert!(validate(json!({"interfaces": ["eth0"]})).is_err());
    }

    #[test]
    fn list_entries_need_required_fields() {
        let err = validate(json!({"interfaces": [
            {"name": "eth0", "type": "ethernet"},
            {"name": "eth1"}
        ]}))
        .expect_err("missing type");
        assert_eq!(
            err.to_string(),
            "test: interfaces[1] is missing required field 'type'"
        );
    }

    #[test]
    fn required_keys_are_enforced() {
        let schema = Schema {
            required: &["interfaces"],
            ..TEST_SCHEMA
        };
        let doc = Document::from_value(json!({})).expect("doc");
        assert!(matches!(
            StructuralValidator.validate(&schema, &doc),
            Err(SchemaError::MissingProperty { .. })
        ));
    }
}
