use config_block_core::{logical_name, Block};

use crate::backends::extra_options;
use crate::converter::{Converter, Diagnostics, SectionOutput};
use crate::document::Document;
use crate::error::ConvertError;
use crate::netjson::VpnTunnel;

/// OpenVPN tunnels as `openvpn` blocks.
pub struct OpenVpn;

impl Converter for OpenVpn {
    fn name(&self) -> &'static str {
        "openvpn"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("openvpn")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        let blocks = document
            .copy_list::<VpnTunnel>("openvpn")?
            .into_iter()
            .map(tunnel_block)
            .collect();
        Ok(vec![SectionOutput::new("openvpn", blocks)])
    }
}

fn tunnel_block(tunnel: VpnTunnel) -> Block {
    let mut options = extra_options(&tunnel.extra);
    // TODO: drop the implicit `enabled=true` once documents always carry `disabled`
    let enabled = match (tunnel.disabled, tunnel.enabled) {
        (Some(disabled), _) => !disabled,
        (None, Some(enabled)) => enabled,
        (None, None) => true,
    };
    options.insert("enabled", enabled);
    Block::with_options("openvpn", logical_name(&tunnel.name), options)
}
