use config_block_core::{logical_name, Block, BlockOptions, OptionValue};

use crate::addr::IpInterface;
use crate::backends::extra_options;
use crate::converter::{Converter, Diagnostics, SectionOutput};
use crate::document::Document;
use crate::error::ConvertError;
use crate::netjson::{Address, AddressFamily, Interface, InterfaceType};

/// `interface` blocks in `network`, one per address.
pub struct Interfaces;

impl Converter for Interfaces {
    fn name(&self) -> &'static str {
        "interfaces"
    }

    fn netjson_key(&self) -> Option<&'static str> {
        Some("interfaces")
    }

    fn to_intermediate(
        &self,
        document: &Document,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Vec<SectionOutput>, ConvertError> {
        let defaults = DnsDefaults {
            servers: document.string_list("dns_servers"),
            search: document.string_list("dns_search"),
        };

        let mut blocks = Vec::new();
        for interface in document.copy_list::<Interface>("interfaces")? {
            blocks.extend(interface_blocks(&interface, &defaults)?);
        }
        Ok(vec![SectionOutput::new("network", blocks)])
    }
}

struct DnsDefaults {
    servers: Vec<String>,
    search: Vec<String>,
}

fn interface_blocks(
    interface: &Interface,
    defaults: &DnsDefaults,
) -> Result<Vec<Block>, ConvertError> {
    let base_name = logical_name(interface.logical_network());
    let no_address = [Address::none()];
    let addresses: &[Address] = if interface.addresses.is_empty() {
        &no_address
    } else {
        &interface.addresses
    };

    let mut blocks = Vec::with_capacity(addresses.len());
    for (idx, address) in addresses.iter().enumerate() {
        let name = if idx == 0 {
            base_name.clone()
        } else {
            format!("{base_name}_{}", idx + 1)
        };

        let mut options = common_options(interface);
        options.insert("ifname", interface.name.as_str());
        options.insert("proto", proto(interface, address));
        options.insert_opt("dns", dns_servers(interface, address, defaults));
        options.insert_opt("dns_search", dns_search(interface, address, defaults));

        if interface.kind == InterfaceType::Bridge {
            if idx == 0 {
                define_bridge(&mut options, interface);
            } else {
                // OpenWrt names the bridge device `br-<interface>`.
                options.insert("ifname", format!("br-{}", interface.name));
            }
        }

        add_address(&mut options, interface, address)?;
        options.extend_json(&address.extra);
        blocks.push(Block::with_options("interface", name, options));
    }
    Ok(blocks)
}

fn common_options(interface: &Interface) -> BlockOptions {
    let mut options = extra_options(&interface.extra);
    if interface.kind != InterfaceType::Wireless {
        options.insert_opt("macaddr", interface.mac.clone());
    }
    options.insert_opt("auto", interface.autostart);
    options.insert_opt("enabled", interface.disabled.map(|disabled| !disabled));
    options
}

fn proto(interface: &Interface, address: &Address) -> String {
    let proto = interface.proto.as_deref().unwrap_or(&address.proto);
    match (address.family, proto) {
        (Some(AddressFamily::Ipv6), "dhcp") => "dhcpv6".to_string(),
        _ => proto.to_string(),
    }
}

fn define_bridge(options: &mut BlockOptions, interface: &Interface) {
    options.insert("type", "bridge");
    let members = interface
        .bridge_members
        .as_deref()
        .unwrap_or_default()
        .join(" ");
    if members.is_empty() {
        options.insert("bridge_empty", true);
        options.remove("ifname");
    } else {
        options.insert("ifname", members);
    }
}

fn add_address(
    options: &mut BlockOptions,
    interface: &Interface,
    address: &Address,
) -> Result<(), ConvertError> {
    let (Some(family), Some(value), Some(mask)) = (
        address.family,
        address.address.as_deref().filter(|a| !a.is_empty()),
        address.mask.filter(|m| *m > 0),
    ) else {
        return Ok(());
    };

    let parsed = IpInterface::from_parts(value, mask).map_err(|source| {
        ConvertError::address(interface.entity(), format!("{value}/{mask}"), source)
    })?;

    match family {
        AddressFamily::Ipv4 => {
            let netmask = parsed.netmask().ok_or_else(|| {
                ConvertError::unsupported(interface.entity(), "ipv4 address", value)
            })?;
            options.insert("ipaddr", value);
            options.insert("netmask", netmask.to_string());
        }
        AddressFamily::Ipv6 => {
            if parsed.version() != 6 {
                return Err(ConvertError::unsupported(
                    interface.entity(),
                    "ipv6 address",
                    value,
                ));
            }
            options.insert("ip6addr", format!("{value}/{mask}"));
        }
    }
    Ok(())
}

fn dns_servers(
    interface: &Interface,
    address: &Address,
    defaults: &DnsDefaults,
) -> Option<OptionValue> {
    if let Some(dns) = &interface.dns {
        return OptionValue::from_json(dns);
    }
    if matches!(address.proto.as_str(), "dhcp" | "none") {
        return None;
    }
    joined(&defaults.servers)
}

fn dns_search(
    interface: &Interface,
    address: &Address,
    defaults: &DnsDefaults,
) -> Option<OptionValue> {
    if let Some(search) = &interface.dns_search {
        return OptionValue::from_json(search);
    }
    if address.proto == "none" {
        return None;
    }
    joined(&defaults.search)
}

fn joined(values: &[String]) -> Option<OptionValue> {
    (!values.is_empty()).then(|| OptionValue::Str(values.join(" ")))
}
