use config_block_core::{Block, BlockOptions};
use serde_json::Value;
use tracing::warn;

use crate::converter::{Converter, Diagnostics, SectionOutput};
use crate::document::Document;
use crate::error::ConvertError;
use crate::schema::Schema;
use crate::settings::ExtensionSettings;

/// Turns list entries under unknown top-level keys into vendor blocks.
///
/// Each entry must be an object whose type field names the block type; the
/// optional name field names the block. Entries without a type are skipped
/// with a warning.
pub struct Passthrough {
    schema: &'static Schema,
    type_field: String,
    name_field: String,
}

impl Passthrough {
    pub fn new(schema: &'static Schema, settings: &ExtensionSettings) -> Self {
        Self {
            schema,
            type_field: settings.type_field.clone(),
            name_field: settings.name_field.clone(),
        }
    }

    fn blocks_for(&self, key: &str, entries: &[Value], diagnostics: &mut Diagnostics) -> Vec<Block> {
        let mut blocks = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            let Some((block_type, fields)) = entry.as_object().and_then(|fields| {
                fields
                    .get(&self.type_field)
                    .and_then(Value::as_str)
                    .map(|block_type| (block_type.to_string(), fields))
            }) else {
                let message = format!(
                    "skipped unrecognized block {key}[{index}]: missing '{}' field",
                    self.type_field
                );
                warn!(section = key, index, "{message}");
                diagnostics.warn(message);
                continue;
            };

            let mut options = BlockOptions::from_json_map(fields);
            options.remove(&self.type_field);
            let name = match options.remove(&self.name_field) {
                Some(value) => value.to_string(),
                None => format!("{block_type}_{}", blocks.len() + 1),
            };
            blocks.push(Block::with_options(block_type, name, options));
        }
        blocks
    }
}

impl Converter for Passthrough {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        None
    }

    fn should_run(&self, _document: &Document) -> bool {
        true
    }

    fn to_intermediate(
        &self,
        document: &Document,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        let mut keys: Vec<&str> = document
            .keys()
            .filter(|key| !self.schema.knows(key))
            .collect();
        keys.sort_unstable();

        let mut outputs = Vec::new();
        for key in keys {
            let Some(Value::Array(entries)) = document.get(key) else {
                continue;
            };
            outputs.push(SectionOutput::new(
                key,
                self.blocks_for(key, entries, diagnostics),
            ));
        }
        Ok(outputs)
    }
}
