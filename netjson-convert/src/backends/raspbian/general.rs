use config_block_core::{Block, BlockOptions};
use serde_json::{Map, Value};

use crate::converter::{Converter, Diagnostics, SectionOutput};
use crate::document::Document;
use crate::error::ConvertError;

/// Hostname and other general settings.
pub struct General;

impl Converter for General {
    fn name(&self) -> &'static str {
        "general"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("general")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        object_block(document, "general", "general", "general")
    }
}

/// NTP daemon settings.
pub struct Ntp;

impl Converter for Ntp {
    fn name(&self) -> &'static str {
        "ntp"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("ntp")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        object_block(document, "ntp", "ntp", "ntp")
    }
}

/// Copy the object under `key` into a single `block_type` block named after
/// the section.
fn object_block(
    document: &Document,
    key: &str,
    section: &str,
    block_type: &str,
) -> Result<Vec<SectionOutput>, ConvertError> {
    let fields: Map<String, Value> = document.copy_object(key)?.unwrap_or_default();
    if fields.is_empty() {
        return Ok(vec![SectionOutput::acknowledged(section)]);
    }
    let block = Block::with_options(block_type, section, BlockOptions::from_json_map(&fields));
    Ok(vec![SectionOutput::new(section, vec![block])])
}
