use serde::Serialize;
use thiserror::Error;

use crate::block::Block;

/// Errors raised while accumulating converter output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntermediateError {
    /// Two blocks with the same type and name landed in one section.
    #[error("duplicate {block_type} block '{name}' in section {section}")]
    DuplicateBlock {
        section: String,
        block_type: String,
        name: String,
    },
}

/// All blocks emitted for one output section (for example `network`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub name: String,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Vec::new(),
        }
    }

    /// Return the first block named `name`, whatever its type.
    pub fn find(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.name == name)
    }
}

/// Ordered collection of sections handed to the rendering layer.
///
/// Sections keep the order in which they were first seen; blocks appended to
/// an existing section go after the blocks already there.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Intermediate {
    sections: Vec<Section>,
}

impl Intermediate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `section` without adding blocks.
    pub fn acknowledge(&mut self, section: &str) {
        self.section_mut(section);
    }

    /// Append `blocks` to `section`, creating it when missing.
    ///
    /// Nothing is appended when any incoming block collides with an existing
    /// block (or another incoming block) of the same type and name.
    pub fn extend(&mut self, section: &str, blocks: Vec<Block>) -> Result<(), IntermediateError> {
        let target = self.section_mut(section);
        for (idx, block) in blocks.iter().enumerate() {
            let clash = target
                .blocks
                .iter()
                .chain(blocks[..idx].iter())
                .any(|b| b.block_type == block.block_type && b.name == block.name);
            if clash {
                return Err(IntermediateError::DuplicateBlock {
                    section: section.to_string(),
                    block_type: block.block_type.clone(),
                    name: block.name.clone(),
                });
            }
        }
        target.blocks.extend(blocks);
        Ok(())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Blocks of `section`, or an empty slice when the section is absent.
    pub fn blocks(&self, section: &str) -> &[Block] {
        self.section(section)
            .map(|s| s.blocks.as_slice())
            .unwrap_or_default()
    }

    /// Return the block named `name` inside `section`.
    pub fn find(&self, section: &str, name: &str) -> Option<&Block> {
        self.section(section).and_then(|s| s.find(name))
    }

    pub fn block_count(&self) -> usize {
        self.sections.iter().map(|s| s.blocks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn section_mut(&mut self, name: &str) -> &mut Section {
        let idx = match self.sections.iter().position(|s| s.name == name) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx]
    }
}
