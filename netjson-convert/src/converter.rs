use config_block_core::Block;

use crate::document::Document;
use crate::error::ConvertError;

/// Blocks a converter contributes to one output section.
///
/// `blocks == None` acknowledges the section without adding anything, which
/// lets callers tell "ran and produced nothing" from "did not run".
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOutput {
    pub section: String,
    pub blocks: Option<Vec<Block>>,
}

impl SectionOutput {
    pub fn new(section: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            section: section.into(),
            blocks: Some(blocks),
        }
    }

    pub fn acknowledged(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            blocks: None,
        }
    }

    /// `Some(blocks)` for a non-empty list, otherwise an acknowledgement.
    pub fn maybe(section: impl Into<String>, blocks: Vec<Block>) -> Self {
        if blocks.is_empty() {
            Self::acknowledged(section)
        } else {
            Self::new(section, blocks)
        }
    }
}

/// Non-fatal findings collected while a converter runs.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<String>,
}

impl Diagnostics {
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}

/// One stage of a backend's conversion pipeline.
pub trait Converter {
    /// Short identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    /// NetJSON top-level key this converter reads, if any.
    fn netjson_key(&self) -> Option<&'static str>;

    /// Whether the converter contributes to this document.
    fn should_run(&self, document: &Document) -> bool {
        self.netjson_key()
            .is_some_and(|key| document.has_entries(key))
    }

    fn to_intermediate(
        &self,
        document: &Document,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError>;
}
