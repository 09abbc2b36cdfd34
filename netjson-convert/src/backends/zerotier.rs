//! ZeroTier controller network objects.

use config_block_core::{logical_name, Block};

use super::extra_options;
use crate::converter::{Converter, Diagnostics, SectionOutput};
use crate::document::Document;
use crate::error::ConvertError;
use crate::netjson::ZeroTierNetwork;
use crate::schema::{Property, PropertyKind, Schema};
use crate::settings::Settings;

pub static SCHEMA: Schema = Schema {
    name: "zerotier",
    properties: &[
        Property::list("zerotier", &["name"]),
        Property::list("files", &["path"]),
        Property::new("type", PropertyKind::Any),
    ],
    required: &[],
};

pub fn converters(_settings: &Settings) -> Vec<Box<dyn Converter>> {
    vec![Box::new(ZeroTier)]
}

/// One `network` block per controller network.
pub struct ZeroTier;

impl Converter for ZeroTier {
    fn name(&self) -> &'static str {
        "zerotier"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("zerotier")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        let blocks = document
            .copy_list::<ZeroTierNetwork>("zerotier")?
            .iter()
            .map(network_block)
            .collect();
        Ok(vec![SectionOutput::new("zerotier", blocks)])
    }
}

fn network_block(network: &ZeroTierNetwork) -> Block {
    let mut options = extra_options(&network.extra);
    options.insert("name", network.name.as_str());
    // `nwid` is the legacy spelling of `id`
    options.insert_opt("id", network.id.as_ref().or(network.nwid.as_ref()));
    options.insert_opt("nwid", network.nwid.as_ref().or(network.id.as_ref()));
    Block::with_options("network", logical_name(&network.name), options)
}
