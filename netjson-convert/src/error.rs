use config_block_core::IntermediateError;
use thiserror::Error;

use crate::addr::AddressError;
use crate::schema::SchemaError;

/// Errors raised by a single converter.
///
/// Every variant names the offending entity (for example `interface wlan0`)
/// so the backend can report both the converter and what it choked on.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{entity}: radio '{radio}' is not declared in radios")]
    UnknownRadio { entity: String, radio: String },
    #[error("{entity}: unsupported {field} '{value}'")]
    UnsupportedValue {
        entity: String,
        field: &'static str,
        value: String,
    },
    #[error("{entity}: missing required field '{field}'")]
    MissingField { entity: String, field: &'static str },
    #[error("{entity}: invalid address '{value}': {source}")]
    InvalidAddress {
        entity: String,
        value: String,
        source: AddressError,
    },
    #[error("malformed '{key}' section: {source}")]
    Malformed {
        key: String,
        source: serde_json::Error,
    },
}

impl ConvertError {
    pub(crate) fn unsupported(
        entity: impl Into<String>,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::UnsupportedValue {
            entity: entity.into(),
            field,
            value: value.into(),
        }
    }

    pub(crate) fn missing(entity: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            entity: entity.into(),
            field,
        }
    }

    pub(crate) fn address(
        entity: impl Into<String>,
        value: impl Into<String>,
        source: AddressError,
    ) -> Self {
        Self::InvalidAddress {
            entity: entity.into(),
            value: value.into(),
            source,
        }
    }
}

/// Errors returned by [`crate::backend::Backend::convert`].
#[derive(Debug, Error)]
pub enum BackendError {
    /// The document failed validation; no converter ran.
    #[error("schema validation failed: {0}")]
    Schema(#[from] SchemaError),
    #[error("{converter} converter failed: {source}")]
    Converter {
        converter: &'static str,
        source: ConvertError,
    },
    #[error(transparent)]
    Block(#[from] IntermediateError),
}
