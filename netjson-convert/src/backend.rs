use config_block_core::{Block, Intermediate};
use tracing::{debug, info};

use crate::backends::{openwrt, raspbian, zerotier};
use crate::converter::{Converter, Diagnostics};
use crate::document::Document;
use crate::error::BackendError;
use crate::schema::{Schema, SchemaError, SchemaValidator, StructuralValidator};
use crate::settings::Settings;

/// Target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    OpenWrt,
    Raspbian,
    ZeroTier,
}

impl BackendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenWrt => "openwrt",
            Self::Raspbian => "raspbian",
            Self::ZeroTier => "zerotier",
        }
    }

    pub fn schema(self) -> &'static Schema {
        match self {
            Self::OpenWrt => &openwrt::SCHEMA,
            Self::Raspbian => &raspbian::SCHEMA,
            Self::ZeroTier => &zerotier::SCHEMA,
        }
    }
}

/// A warning raised by one converter during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionWarning {
    pub converter: &'static str,
    pub message: String,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub kind: BackendKind,
    pub intermediate: Intermediate,
    /// Converters that ran, in order.
    pub ran: Vec<&'static str>,
    pub warnings: Vec<ConversionWarning>,
}

/// Binds a schema and an ordered converter list for one platform.
pub struct Backend {
    kind: BackendKind,
    schema: &'static Schema,
    converters: Vec<Box<dyn Converter>>,
    validator: Box<dyn SchemaValidator>,
}

impl Backend {
    pub fn new(kind: BackendKind, settings: &Settings) -> Self {
        let converters = match kind {
            BackendKind::OpenWrt => openwrt::converters(settings),
            BackendKind::Raspbian => raspbian::converters(settings),
            BackendKind::ZeroTier => zerotier::converters(settings),
        };
        Self {
            kind,
            schema: kind.schema(),
            converters,
            validator: Box::new(StructuralValidator),
        }
    }

    /// Replace the bundled structural validator.
    pub fn with_validator(mut self, validator: impl SchemaValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn converter_names(&self) -> Vec<&'static str> {
        self.converters.iter().map(|c| c.name()).collect()
    }

    pub fn validate(&self, document: &Document) -> Result<(), SchemaError> {
        self.validator.validate(self.schema, document)
    }

    /// Validate `document`, then run every applicable converter in order.
    pub fn convert(&self, document: &Document) -> Result<Conversion, BackendError> {
        self.validate(document)?;

        let mut intermediate = Intermediate::new();
        let mut ran = Vec::new();
        let mut warnings = Vec::new();

        for converter in &self.converters {
            let name = converter.name();
            if !converter.should_run(document) {
                debug!(backend = self.kind.as_str(), converter = name, "skipped");
                continue;
            }
            debug!(backend = self.kind.as_str(), converter = name, "running");

            let mut diagnostics = Diagnostics::default();
            let outputs = converter
                .to_intermediate(document, &mut diagnostics)
                .map_err(|source| BackendError::Converter {
                    converter: name,
                    source,
                })?;

            for output in outputs {
                match output.blocks {
                    Some(blocks) => {
                        intermediate.extend(&output.section, sorted(blocks))?;
                    }
                    None => intermediate.acknowledge(&output.section),
                }
            }

            warnings.extend(
                diagnostics
                    .into_warnings()
                    .into_iter()
                    .map(|message| ConversionWarning {
                        converter: name,
                        message,
                    }),
            );
            ran.push(name);
        }

        info!(
            backend = self.kind.as_str(),
            sections = intermediate.sections().len(),
            blocks = intermediate.block_count(),
            "conversion finished"
        );

        Ok(Conversion {
            kind: self.kind,
            intermediate,
            ran,
            warnings,
        })
    }
}

fn sorted(blocks: Vec<Block>) -> Vec<Block> {
    blocks
        .into_iter()
        .map(|mut block| {
            block.options = block.options.sorted();
            block
        })
        .collect()
}
