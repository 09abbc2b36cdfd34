use config_block_core::{Block, BlockOptions};

use crate::backends::extra_options;
use crate::converter::{Converter, Diagnostics, SectionOutput};
use crate::document::Document;
use crate::error::ConvertError;
use crate::netjson::Switch as SwitchConfig;

/// Each switch becomes a `switch` block followed by its `switch_vlan` blocks.
pub struct Switch;

impl Converter for Switch {
    fn name(&self) -> &'static str {
        "switch"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("switch")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        let mut blocks = Vec::new();
        for switch in document.copy_list::<SwitchConfig>("switch")? {
            let mut options = extra_options(&switch.extra);
            options.insert("name", switch.name.as_str());
            blocks.push(Block::with_options("switch", switch.name.as_str(), options));

            for (idx, vlan) in switch.vlan.iter().enumerate() {
                blocks.push(Block::with_options(
                    "switch_vlan",
                    format!("{}_vlan{}", switch.name, idx + 1),
                    BlockOptions::from_json_map(vlan),
                ));
            }
        }
        Ok(vec![SectionOutput::new("network", blocks)])
    }
}
